//! Pure value types shared by the [`Rover`](crate::rover::Rover) and
//! [`Plateau`](crate::plateau::Plateau) entities.

pub mod direction;
pub mod position;

pub use direction::*;
pub use position::*;
