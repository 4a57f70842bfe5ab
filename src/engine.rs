//! Engine state management.
//!
//! Holds the current board, the side to search for, and the configuration,
//! and answers protocol commands. The engine never advances turns on its own:
//! it reports a move and leaves applying it to whoever sent the position.

use std::io::{self, Write};
use std::time::Instant;

use crate::board::{Board, Side};
use crate::config::{ConfigError, EngineConfig};
use crate::eval::{evaluate, relative};
use crate::protocol::notation::{parse_placement, parse_side, NotationError};
use crate::protocol::parser::GoParams;
use crate::search::{search_with, validate_depth, SearchError, SearchResult};

/// Errors reported back to the command loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no position set")]
    NoPosition,

    #[error("failed to parse position: {0}")]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub side: Side,
    pub config: EngineConfig,
}

impl Engine {
    /// Creates an engine with default settings and no position.
    pub fn new() -> Self {
        Engine::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Engine {
            position: None,
            side: Side::Light,
            config,
        }
    }

    /// Resets the position for a new game. Settings are kept.
    pub fn new_game(&mut self) {
        self.position = None;
        self.side = Side::Light;
    }

    /// Sets the current board from a placement string and optional side token.
    pub fn set_position(&mut self, placement: &str, side: Option<&str>) -> Result<(), EngineError> {
        let board = parse_placement(placement)?;
        let side = match side {
            Some(s) => parse_side(s)?,
            None => Side::Light,
        };
        self.position = Some(board);
        self.side = side;
        Ok(())
    }

    /// Applies a `setoption` command.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), EngineError> {
        self.config.set_option(name, value)?;
        Ok(())
    }

    /// Writes the handshake: id lines, options, protocol version, and `hellook`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name gambit")?;
        writeln!(out, "id author gambit developers")?;
        writeln!(
            out,
            "option name Difficulty type combo default {} var easy var medium var hard",
            self.config.difficulty.name()
        )?;
        writeln!(
            out,
            "option name Depth type spin default {} min 0 max {}",
            self.config.search_depth(),
            crate::search::MAX_DEPTH
        )?;
        writeln!(
            out,
            "option name Rules type combo default {} var free var geometric",
            self.config.rules.name()
        )?;
        writeln!(out, "option name Parallel type check default {}", self.config.parallel)?;
        writeln!(out, "option name Pruning type check default {}", self.config.pruning)?;
        writeln!(
            out,
            "option name MoveTime type spin default {} min 0 max 600000",
            self.config.movetime_ms.unwrap_or(0)
        )?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Searches the current position and writes an `info` line followed by
    /// `bestmove <move>` or `bestmove none`.
    pub fn handle_go<W: Write>(
        &self,
        params: &GoParams,
        out: &mut W,
    ) -> Result<SearchResult, EngineError> {
        let board = self.position.as_ref().ok_or(EngineError::NoPosition)?;
        let depth = params.depth.map(validate_depth).transpose()?;
        let search_params = self.config.search_params(depth, params.movetime);

        let start = Instant::now();
        let result = search_with(board, self.side, &search_params, &self.config.rules);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        writeln!(
            out,
            "info depth {} nodes {} score {} time {}",
            result.depth,
            result.nodes,
            relative(result.score, self.side),
            elapsed_ms
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", mv)?,
            None => writeln!(out, "bestmove none")?,
        }
        out.flush()?;
        Ok(result)
    }

    /// Writes the static evaluation (light minus dark) of the current position.
    pub fn handle_eval<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let board = self.position.as_ref().ok_or(EngineError::NoPosition)?;
        writeln!(out, "info score {}", evaluate(board))?;
        out.flush()?;
        Ok(())
    }

    /// Writes the current position as a diagram.
    pub fn handle_display<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let board = self.position.as_ref().ok_or(EngineError::NoPosition)?;
        writeln!(out, "{}", board)?;
        writeln!(out, "side {}", self.side.name())?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
