//! Position evaluation.
//!
//! Scores a board by material balance, light minus dark.

pub(crate) mod material;

pub use material::{evaluate, material, piece_value, relative, Score};
