//! The rover entity: a pose on the grid that turns and drives on command.

mod actions;

pub use actions::*;

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{Direction, Position};
use crate::error::{Result, SimulationError};
use crate::plateau::Plateau;

/// A rover with a unique id and a mutable `(Position, Direction)` pose.
///
/// Rovers never hold a reference to the plateau they drive on. Moves that must be
/// validated receive the plateau as an argument instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    id: String,
    position: Position,
    direction: Direction,
}

impl Rover {
    /// Creates a rover at `position` facing `direction`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInitialization`] when either coordinate is negative.
    pub fn new(id: impl Into<String>, position: Position, direction: Direction) -> Result<Self> {
        let id = id.into();
        if position.x < 0 || position.y < 0 {
            return Err(SimulationError::InvalidInitialization(format!(
                "Rover {id} position {position} must be non-negative"
            )));
        }
        Ok(Self {
            id,
            position,
            direction,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turns the rover 90 degrees. Always succeeds.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.direction = match rotation {
            Rotation::Left => self.direction.rotate_left(),
            Rotation::Right => self.direction.rotate_right(),
        };
    }

    /// The position one step forward in the current direction. Does not move the rover.
    pub fn simulate_next_position(&self) -> Position {
        let (dx, dy) = self.direction.delta();
        self.position.offset(dx, dy)
    }

    /// Moves one cell forward.
    ///
    /// Without a plateau the move is committed unconditionally. With one, the
    /// target must be inside its boundaries and not held by another rover;
    /// otherwise the rover stays put and [`SimulationError::InvalidCommand`] is
    /// returned.
    pub fn move_forward(&mut self, plateau: Option<&Plateau>) -> Result<()> {
        let target = self.simulate_next_position();

        if let Some(plateau) = plateau {
            if !plateau.is_position_inside_boundaries(&target) {
                warn!(rover_id = %self.id, position = %target, "Move rejected: out of bounds");
                return Err(SimulationError::InvalidCommand(format!(
                    "Rover {} cannot move - position {} is out of plateau bounds (0, 0) to ({}, {})",
                    self.id,
                    target,
                    plateau.max_x(),
                    plateau.max_y()
                )));
            }
            if plateau.is_position_occupied_by_rover(&target, Some(&self.id)) {
                warn!(rover_id = %self.id, position = %target, "Move rejected: cell occupied");
                return Err(SimulationError::InvalidCommand(format!(
                    "Rover {} cannot move - position {} is already occupied by another rover",
                    self.id, target
                )));
            }
        }

        self.position = target;
        Ok(())
    }

    /// Executes one command, validating moves against `plateau` when given.
    pub fn execute(&mut self, command: Command, plateau: Option<&Plateau>) -> Result<()> {
        debug!(rover_id = %self.id, %command, "Execute");
        match command {
            Command::RotateLeft => {
                self.rotate(Rotation::Left);
                Ok(())
            }
            Command::RotateRight => {
                self.rotate(Rotation::Right);
                Ok(())
            }
            Command::Move => self.move_forward(plateau),
        }
    }
}

/// Renders as `<x> <y> <direction>`, e.g. `1 3 N`.
impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rover_at(x: i64, y: i64, direction: Direction) -> Rover {
        Rover::new("test-rover", Position::new(x, y), direction).unwrap()
    }

    #[test]
    fn new_rover_keeps_initial_pose() {
        let rover = rover_at(0, 0, Direction::North);
        assert_eq!(rover.id(), "test-rover");
        assert_eq!(rover.position(), Position::new(0, 0));
        assert_eq!(rover.direction(), Direction::North);
    }

    #[test]
    fn negative_coordinates_are_rejected() {
        let err = Rover::new("1", Position::new(-1, 0), Direction::North).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInitialization(_)));

        let err = Rover::new("1", Position::new(0, -3), Direction::East).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInitialization(_)));
    }

    #[test]
    fn rotates_left_through_all_directions() {
        let mut rover = rover_at(0, 0, Direction::North);
        for expected in [Direction::West, Direction::South, Direction::East, Direction::North] {
            rover.rotate(Rotation::Left);
            assert_eq!(rover.direction(), expected);
        }
    }

    #[test]
    fn rotates_right_through_all_directions() {
        let mut rover = rover_at(0, 0, Direction::North);
        for expected in [Direction::East, Direction::South, Direction::West, Direction::North] {
            rover.rotate(Rotation::Right);
            assert_eq!(rover.direction(), expected);
        }
    }

    #[test]
    fn simulate_next_position_does_not_mutate() {
        let rover = rover_at(2, 2, Direction::West);
        let first = rover.simulate_next_position();
        let second = rover.simulate_next_position();
        assert_eq!(first, Position::new(1, 2));
        assert_eq!(first, second);
        assert_eq!(rover.position(), Position::new(2, 2));
    }

    #[test]
    fn unconstrained_moves_follow_facing() {
        let cases = [
            (Direction::North, Position::new(1, 2)),
            (Direction::East, Position::new(2, 1)),
            (Direction::South, Position::new(1, 0)),
            (Direction::West, Position::new(0, 1)),
        ];
        for (direction, expected) in cases {
            let mut rover = rover_at(1, 1, direction);
            rover.move_forward(None).unwrap();
            assert_eq!(rover.position(), expected);
        }
    }

    #[test]
    fn unconstrained_move_may_leave_the_grid() {
        let mut rover = rover_at(0, 0, Direction::South);
        rover.move_forward(None).unwrap();
        assert_eq!(rover.position(), Position::new(0, -1));
    }

    #[test]
    fn move_past_boundary_fails_and_keeps_position() {
        let plateau = Plateau::new("1", 5, 5).unwrap();
        let mut rover = Rover::new("1", Position::new(2, 5), Direction::North).unwrap();

        let err = rover.move_forward(Some(&plateau)).unwrap_err();

        assert!(matches!(err, SimulationError::InvalidCommand(_)));
        let message = err.to_string();
        assert!(message.contains("(2, 6)"), "unexpected message: {message}");
        assert!(message.contains("(0, 0) to (5, 5)"), "unexpected message: {message}");
        assert_eq!(rover.position(), Position::new(2, 5));
    }

    #[test]
    fn move_into_other_rover_fails() {
        let mut plateau = Plateau::new("1", 5, 5).unwrap();
        plateau
            .add_rover(Rover::new("blocker", Position::new(1, 2), Direction::South).unwrap())
            .unwrap();
        let mut rover = Rover::new("mover", Position::new(1, 1), Direction::North).unwrap();

        let err = rover.move_forward(Some(&plateau)).unwrap_err();

        assert!(matches!(err, SimulationError::InvalidCommand(_)));
        assert!(err.to_string().contains("already occupied"));
        assert_eq!(rover.position(), Position::new(1, 1));
    }

    #[test]
    fn execute_dispatches_each_command() {
        let mut rover = rover_at(1, 2, Direction::North);
        for c in "LMLMLMLMM".chars() {
            let command = Command::try_from(c).unwrap();
            rover.execute(command, None).unwrap();
        }
        assert_eq!(rover.to_string(), "1 3 N");

        let mut rover = rover_at(3, 3, Direction::East);
        for c in "MMRMMRMRRM".chars() {
            let command = Command::try_from(c).unwrap();
            rover.execute(command, None).unwrap();
        }
        assert_eq!(rover.to_string(), "5 1 E");
    }

    #[test]
    fn displays_pose() {
        let mut rover = rover_at(0, 0, Direction::North);
        assert_eq!(rover.to_string(), "0 0 N");
        rover.move_forward(None).unwrap();
        rover.rotate(Rotation::Right);
        assert_eq!(rover.to_string(), "0 1 E");
    }
}
