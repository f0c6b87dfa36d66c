//! The plateau entity: a bounded grid that owns the rovers driving on it.
//!
//! A [`Plateau`] enforces the spatial invariants of a run:
//! - every registered rover lies within `(0, 0)` to `(max_x, max_y)` inclusive;
//! - no two registered rovers share a cell.
//!
//! Rovers are kept in insertion order next to an id index, so enumeration follows
//! the order rovers were added while id lookups stay constant time.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::domain::Position;
use crate::error::{Result, SimulationError};
use crate::rover::{Command, Rover};

#[derive(Debug, Clone)]
pub struct Plateau {
    id: String,
    max_x: i64,
    max_y: i64,
    rovers: Vec<Rover>,
    index: HashMap<String, usize>,
}

impl Plateau {
    /// Creates an empty plateau with inclusive upper bounds `(max_x, max_y)`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInitialization`] when either bound is negative.
    pub fn new(id: impl Into<String>, max_x: i64, max_y: i64) -> Result<Self> {
        if max_x < 0 || max_y < 0 {
            return Err(SimulationError::InvalidInitialization(
                "Plateau boundaries must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            id: id.into(),
            max_x,
            max_y,
            rovers: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Creates a plateau from untyped numeric bounds, as read from a script.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInitialization`] when a bound is not a finite
    /// integer, or is negative.
    pub fn from_numbers(id: impl Into<String>, max_x: f64, max_y: f64) -> Result<Self> {
        let integral = |value: f64| value.is_finite() && value.fract() == 0.0;
        if !integral(max_x) || !integral(max_y) {
            return Err(SimulationError::InvalidInitialization(
                "Plateau boundaries must be integers".to_string(),
            ));
        }
        Self::new(id, max_x as i64, max_y as i64)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    pub fn max_y(&self) -> i64 {
        self.max_y
    }

    /// Registered rovers in insertion order.
    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn rover(&self, id: &str) -> Option<&Rover> {
        self.index.get(id).map(|&i| &self.rovers[i])
    }

    pub fn rover_count(&self) -> usize {
        self.rovers.len()
    }

    /// Registers `rover`, making this plateau its owner.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInitialization`] when the rover sits outside the
    /// boundaries, on an occupied cell, or reuses an id already registered here.
    pub fn add_rover(&mut self, rover: Rover) -> Result<()> {
        let position = rover.position();

        if !self.is_position_inside_boundaries(&position) {
            warn!(rover_id = %rover.id(), %position, "Placement rejected: out of bounds");
            return Err(SimulationError::InvalidInitialization(format!(
                "Rover {} cannot be added - position {} is out of plateau bounds (0, 0) to ({}, {})",
                rover.id(),
                position,
                self.max_x,
                self.max_y
            )));
        }

        if self.is_position_occupied_by_rover(&position, None) {
            warn!(rover_id = %rover.id(), %position, "Placement rejected: cell occupied");
            return Err(SimulationError::InvalidInitialization(format!(
                "Rover {} cannot be added - position {} is already occupied",
                rover.id(),
                position
            )));
        }

        if self.index.contains_key(rover.id()) {
            return Err(SimulationError::InvalidInitialization(format!(
                "Rover {} cannot be added - id is already registered on plateau {}",
                rover.id(),
                self.id
            )));
        }

        debug!(rover_id = %rover.id(), %rover, "Rover added");
        self.index.insert(rover.id().to_string(), self.rovers.len());
        self.rovers.push(rover);
        Ok(())
    }

    /// True iff `0 <= x <= max_x` and `0 <= y <= max_y`.
    pub fn is_position_inside_boundaries(&self, position: &Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }

    /// True iff a registered rover other than `exclude` sits on `position`.
    pub fn is_position_occupied_by_rover(&self, position: &Position, exclude: Option<&str>) -> bool {
        self.rovers
            .iter()
            .any(|rover| Some(rover.id()) != exclude && rover.position() == *position)
    }

    /// Executes `command` for the registered rover `id`, validating moves against
    /// this plateau.
    ///
    /// The rover's pose is written back only when the command succeeds.
    ///
    /// # Errors
    /// [`SimulationError::InvalidCommand`] when no such rover is registered or the
    /// move is rejected.
    pub fn command_rover(&mut self, id: &str, command: Command) -> Result<()> {
        let Some(&slot) = self.index.get(id) else {
            return Err(SimulationError::InvalidCommand(format!(
                "Rover {id} is not registered on plateau {}",
                self.id
            )));
        };

        let mut rover = self.rovers[slot].clone();
        rover.execute(command, Some(&*self))?;
        self.rovers[slot] = rover;
        Ok(())
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plateau {}: ({}, {}) with {} rovers",
            self.id,
            self.max_x,
            self.max_y,
            self.rovers.len()
        )
    }
}
