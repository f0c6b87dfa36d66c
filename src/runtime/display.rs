//! Rendering of a finished plateau for the console.

use crate::plateau::Plateau;

/// How much detail [`render`] prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `<x> <y> <direction>` line per rover.
    #[default]
    Compact,
    /// A `Plateau: <maxX> <maxY>` header, then `Rover <id> position: ...` per rover.
    Verbose,
}

/// Renders the plateau's rovers, in insertion order, one line each.
pub fn render(plateau: &Plateau, mode: OutputMode) -> Vec<String> {
    match mode {
        OutputMode::Compact => plateau.rovers().iter().map(ToString::to_string).collect(),
        OutputMode::Verbose => {
            let header = format!("Plateau: {} {}", plateau.max_x(), plateau.max_y());
            std::iter::once(header)
                .chain(
                    plateau
                        .rovers()
                        .iter()
                        .map(|rover| format!("Rover {} position: {}", rover.id(), rover)),
                )
                .collect()
        }
    }
}
