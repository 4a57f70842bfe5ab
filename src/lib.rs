//! gambit engine library.
//!
//! Exposes the board representation, material evaluation, move enumeration,
//! and fixed-depth search, plus the protocol and configuration layers used by
//! the binary entry point and integration tests.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;

pub use board::{Board, Move, Piece, PieceKind, Side, Square};
pub use eval::{evaluate, Score};
pub use search::{search, search_with, SearchParams, SearchResult};
