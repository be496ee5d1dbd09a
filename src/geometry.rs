//! Geometrical objects.

mod line;
mod plane;
mod rect;

pub use line::Line2;
pub use plane::Plane;
pub use rect::Rect;
