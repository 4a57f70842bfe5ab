//! Search.
//!
//! Explores every move sequence to a fixed depth and picks the root move
//! whose line scores best for the side searched.

pub mod minimax;

pub use minimax::{
    search, search_with, validate_depth, Perspective, SearchError, SearchParams, SearchResult,
    MAX_DEPTH,
};
