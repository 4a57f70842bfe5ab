//! Text protocol handling.
//!
//! Board placement notation and the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_placement, parse_placement, parse_side, NotationError, STARTPOS};
pub use parser::{parse_command, Command, GoParams};
