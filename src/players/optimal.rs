//! Game-theoretically optimal player.
//!
//! Full-depth minimax with alpha-beta pruning. The tree below any 3x3
//! position is at most nine plies deep, so the search always reaches
//! terminal states and needs no evaluation of unfinished positions.
//!
//! Scores are from this player's point of view: `+1` win, `0` draw,
//! `-1` loss. Cells are scanned in row-major order and the first move
//! reaching the best score is kept.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark, Move};
use serde::Serialize;
use tracing::{debug, instrument};

const WIN: i8 = 1;
const DRAW: i8 = 0;
const LOSS: i8 = -1;

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Best move for the side to move, `None` at terminal positions.
    pub best_move: Option<Move>,
    /// Game-theoretic value for the searching player: -1, 0 or 1.
    pub score: i8,
}

/// Player that never loses.
#[derive(Debug, Clone)]
pub struct OptimalPlayer {
    name: String,
    mark: Mark,
    stats: SearchStats,
}

impl OptimalPlayer {
    /// Creates an optimal player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the last call to [`OptimalPlayer::evaluate`].
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` assuming it is this player's turn.
    ///
    /// The board is probed in place and restored before returning.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn evaluate(&mut self, board: &mut Board) -> Evaluation {
        self.stats = SearchStats::default();
        let evaluation = self.search(board, true, i8::MIN, i8::MAX);
        debug!(
            best_move = ?evaluation.best_move,
            score = evaluation.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search finished"
        );
        evaluation
    }

    fn search(&mut self, board: &mut Board, maximizing: bool, mut alpha: i8, mut beta: i8) -> Evaluation {
        self.stats.nodes += 1;

        // The previous ply may have ended the game.
        if board.check_winner(self.mark) {
            return Evaluation { best_move: None, score: WIN };
        }
        if board.check_winner(self.mark.opponent()) {
            return Evaluation { best_move: None, score: LOSS };
        }
        if board.is_draw() {
            return Evaluation { best_move: None, score: DRAW };
        }

        let side = if maximizing { self.mark } else { self.mark.opponent() };
        let mut best = Evaluation {
            best_move: None,
            score: if maximizing { i8::MIN } else { i8::MAX },
        };

        for mv in Move::ALL {
            if !board.is_valid_move(mv.row(), mv.col()) {
                continue;
            }

            let score = {
                let mut probe = board.make_temporary_move(mv, side);
                self.search(probe.board_mut(), !maximizing, alpha, beta).score
            };

            if maximizing {
                if score > best.score {
                    best = Evaluation { best_move: Some(mv), score };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = Evaluation { best_move: Some(mv), score };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl Player for OptimalPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &mut Board) -> Result<Move, PlayerError> {
        let evaluation = self.evaluate(board);
        evaluation.best_move.ok_or(PlayerError::NoMoveFound)
    }
}
