//! Enumeration of binary tree shapes for a given leaf count.

mod enumerate;

pub use enumerate::enumerate_shapes;
