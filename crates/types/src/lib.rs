pub mod geometry;
pub mod units;

pub use geometry::{Rect, Size};
pub use units::{mm, PageSize, PT_PER_MM};
