pub mod point;

pub use point::{cross, dot, Point, Vector};
