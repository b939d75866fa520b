//! Core domain entities.
//!
//! - [`Line`] - A stored subway line
//! - [`NewLine`] - Input for creating a line (no id or timestamps yet)

pub mod line;

pub use line::{Line, NewLine};
