//! Fixed-depth minimax over material scores.
//!
//! The side to move is tied to the perspective of each level: maximizing
//! levels move light pieces, minimizing levels move dark pieces, and the
//! score is always light minus dark. Every candidate is applied to a fresh
//! copy of the board and explored to the requested depth. Ties keep the first
//! move in enumeration order because only strict improvements replace the best.
//!
//! Alpha-beta pruning and root-level parallelism are optional; neither changes
//! the chosen move or its score.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::board::{Board, Move, Side};
use crate::eval::{evaluate, Score};
use crate::movegen::{moves_with, FreeMovement, MoveFilter};

/// Deepest search accepted from callers.
pub const MAX_DEPTH: u32 = 5;

/// Errors raised when validating caller-supplied search parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: i64, max: u32 },
}

/// Converts an untrusted depth into a search depth.
pub fn validate_depth(depth: i64) -> Result<u32, SearchError> {
    if depth < 0 {
        return Err(SearchError::NegativeDepth(depth));
    }
    if depth > MAX_DEPTH as i64 {
        return Err(SearchError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(depth as u32)
}

/// Which extreme a tree level selects, and therefore whose pieces move there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Light moves; the greatest child score wins.
    Maximizing,
    /// Dark moves; the least child score wins.
    Minimizing,
}

impl Perspective {
    /// Perspective of the root level when searching for `side`.
    pub const fn for_root(side: Side) -> Perspective {
        match side {
            Side::Light => Perspective::Maximizing,
            Side::Dark => Perspective::Minimizing,
        }
    }

    /// The side whose pieces move at this level.
    pub const fn mover(self) -> Side {
        match self {
            Perspective::Maximizing => Side::Light,
            Perspective::Minimizing => Side::Dark,
        }
    }

    /// Perspective one ply down.
    pub const fn flip(self) -> Perspective {
        match self {
            Perspective::Maximizing => Perspective::Minimizing,
            Perspective::Minimizing => Perspective::Maximizing,
        }
    }

    /// True if `candidate` is strictly better than `best` at this level.
    pub const fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Perspective::Maximizing => candidate > best,
            Perspective::Minimizing => candidate < best,
        }
    }

    /// Starting value that any real score improves on.
    const fn worst(self) -> Score {
        match self {
            Perspective::Maximizing => Score::MIN,
            Perspective::Minimizing => Score::MAX,
        }
    }
}

/// Tuning knobs for a single search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub depth: u32,
    /// Explore root moves on the rayon thread pool.
    pub parallel: bool,
    /// Skip subtrees that cannot change the result.
    pub pruning: bool,
    /// Wall-clock cap, checked between root moves.
    pub movetime: Option<Duration>,
}

impl SearchParams {
    /// Plain sequential, unpruned search to `depth`.
    pub fn new(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or `None` when the side has nothing to move or the
    /// depth is zero.
    pub best_move: Option<Move>,
    /// Score of the best line, light minus dark.
    pub score: Score,
    pub depth: u32,
    /// Number of moves applied during the search.
    pub nodes: u64,
    /// False if the time cap cut off some root moves.
    pub completed: bool,
}

impl SearchResult {
    fn leaf(board: &Board, depth: u32) -> Self {
        SearchResult {
            best_move: None,
            score: evaluate(board),
            depth,
            nodes: 0,
            completed: true,
        }
    }
}

/// Searches `depth` plies for `side` under free-movement rules.
pub fn search(board: &Board, depth: u32, side: Side) -> SearchResult {
    search_with(board, side, &SearchParams::new(depth), &FreeMovement::default())
}

/// Searches for `side` with explicit parameters and move filter.
pub fn search_with<F: MoveFilter + ?Sized>(
    board: &Board,
    side: Side,
    params: &SearchParams,
    filter: &F,
) -> SearchResult {
    let start = Instant::now();
    let depth = params.depth;
    if depth == 0 {
        return SearchResult::leaf(board, depth);
    }

    let perspective = Perspective::for_root(side);
    let moves = moves_with(board, perspective.mover(), filter);
    if moves.is_empty() {
        return SearchResult::leaf(board, depth);
    }

    // The first root move always runs so a capped search still has a move.
    let expired = |index: usize| {
        index > 0 && params.movetime.is_some_and(|limit| start.elapsed() >= limit)
    };

    let branches: Vec<Option<(Score, u64)>> = if params.parallel {
        moves
            .par_iter()
            .enumerate()
            .map(|(i, &mv)| {
                if expired(i) {
                    return None;
                }
                let mut walker = Minimax::new(filter, params.pruning);
                let score = walker.branch(board, mv, depth, perspective, Score::MIN, Score::MAX);
                Some((score, walker.nodes))
            })
            .collect()
    } else {
        let mut walker = Minimax::new(filter, params.pruning);
        let mut bound = perspective.worst();
        let mut branches = Vec::with_capacity(moves.len());
        for (i, &mv) in moves.iter().enumerate() {
            if expired(i) {
                break;
            }
            // Narrow the window with the best root score so far. Fail-soft
            // returns keep any non-improving branch from looking like one.
            let (alpha, beta) = match (params.pruning, perspective) {
                (true, Perspective::Maximizing) => (bound, Score::MAX),
                (true, Perspective::Minimizing) => (Score::MIN, bound),
                (false, _) => (Score::MIN, Score::MAX),
            };
            let before = walker.nodes;
            let score = walker.branch(board, mv, depth, perspective, alpha, beta);
            if perspective.improves(score, bound) {
                bound = score;
            }
            branches.push(Some((score, walker.nodes - before)));
        }
        branches
    };

    let mut result = SearchResult {
        best_move: None,
        score: perspective.worst(),
        depth,
        nodes: 0,
        completed: branches.len() == moves.len() && branches.iter().all(Option::is_some),
    };
    for (&mv, branch) in moves.iter().zip(&branches) {
        let Some((score, nodes)) = *branch else {
            continue;
        };
        result.nodes += nodes;
        if perspective.improves(score, result.score) {
            result.score = score;
            result.best_move = Some(mv);
        }
    }

    result
}

/// Recursive walker carrying the filter and node count for one thread.
struct Minimax<'a, F: ?Sized> {
    filter: &'a F,
    pruning: bool,
    nodes: u64,
}

impl<'a, F: MoveFilter + ?Sized> Minimax<'a, F> {
    fn new(filter: &'a F, pruning: bool) -> Self {
        Minimax {
            filter,
            pruning,
            nodes: 0,
        }
    }

    /// Scores a root move by applying it and searching the reply tree.
    fn branch(
        &mut self,
        board: &Board,
        mv: Move,
        depth: u32,
        perspective: Perspective,
        alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;
        let child = board.apply(mv);
        self.value(&child, depth - 1, perspective.flip(), alpha, beta)
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `alpha`/`beta` are only consulted when pruning is enabled; the return
    /// value is fail-soft, so a cut-off node reports a bound on the correct
    /// side of the window.
    fn value(
        &mut self,
        board: &Board,
        depth: u32,
        perspective: Perspective,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        if depth == 0 {
            return evaluate(board);
        }

        let moves = moves_with(board, perspective.mover(), self.filter);
        if moves.is_empty() {
            return evaluate(board);
        }

        let mut best = perspective.worst();
        for mv in moves {
            let score = self.branch(board, mv, depth, perspective, alpha, beta);
            if perspective.improves(score, best) {
                best = score;
            }
            if self.pruning {
                match perspective {
                    Perspective::Maximizing => alpha = alpha.max(best),
                    Perspective::Minimizing => beta = beta.min(best),
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}
