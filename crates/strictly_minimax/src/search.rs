//! Exhaustive minimax search.
//!
//! Every reachable position below the root is visited: no pruning and no
//! memoization. The tree is at most nine plies deep, so plain recursion is
//! bounded.

use super::action::Move;
use super::rules::{actions, player, result, terminal, utility};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which way a ply pushes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// X's plies: prefer higher utility.
    Maximize,
    /// O's plies: prefer lower utility.
    Minimize,
}

impl Objective {
    /// The objective of the player to move.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => Objective::Maximize,
            Player::O => Objective::Minimize,
        }
    }

    /// The objective of the opponent.
    pub fn flip(self) -> Self {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }

    /// Starting value that any real score beats (−∞ or +∞).
    fn worst(self) -> i8 {
        match self {
            Objective::Maximize => i8::MIN,
            Objective::Minimize => i8::MAX,
        }
    }

    /// Strict improvement. Equal scores never displace an earlier choice.
    fn improves(self, candidate: i8, best: i8) -> bool {
        match self {
            Objective::Maximize => candidate > best,
            Objective::Minimize => candidate < best,
        }
    }
}

/// Outcome of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The chosen move, `None` for terminal positions.
    pub best: Option<Move>,
    /// Game value of the position under optimal play, from X's perspective.
    pub value: i8,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// A legal move together with the value of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    pub mv: Move,
    /// Game value after the move, from X's perspective.
    pub value: i8,
}

#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Minimax value of `board` when the side to move plays `objective`.
    fn value(&mut self, board: &Board, objective: Objective) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mut best = objective.worst();
        for (_, child) in children(board) {
            let value = self.value(&child, objective.flip());
            if objective.improves(value, best) {
                best = value;
            }
        }
        best
    }
}

/// Legal moves paired with the boards they produce, in `actions` order.
fn children(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    actions(board)
        .into_iter()
        .filter_map(move |mv| result(board, mv).ok().map(|child| (mv, child)))
}

/// Searches the full game tree below `board`.
///
/// X takes the first move reaching a strictly higher value than any earlier
/// move, O the first reaching a strictly lower one, so ties go to the move
/// listed first by [`actions`].
#[instrument]
pub fn search(board: &Board) -> SearchReport {
    if terminal(board) {
        debug!("Position is terminal");
        return SearchReport {
            best: None,
            value: utility(board),
            nodes: 1,
        };
    }

    let objective = Objective::for_player(player(board));
    let mut searcher = Searcher { nodes: 1 };
    let mut best = None;
    let mut best_value = objective.worst();

    for (mv, child) in children(board) {
        let value = searcher.value(&child, objective.flip());
        if objective.improves(value, best_value) {
            best_value = value;
            best = Some(mv);
        }
    }

    debug!(
        best = ?best,
        value = best_value,
        nodes = searcher.nodes,
        "Search complete"
    );

    SearchReport {
        best,
        value: best_value,
        nodes: searcher.nodes,
    }
}

/// Returns the optimal move for the player to move, or `None` when the
/// game is over.
#[instrument]
pub fn minimax(board: &Board) -> Option<Move> {
    search(board).best
}

/// Returns the game-theoretic value of `board` from X's perspective.
#[instrument]
pub fn evaluate(board: &Board) -> i8 {
    search(board).value
}

/// Scores every legal move of a non-terminal board.
///
/// Terminal boards yield no moves.
#[instrument]
pub fn analyze(board: &Board) -> Vec<ScoredMove> {
    if terminal(board) {
        return Vec::new();
    }

    let objective = Objective::for_player(player(board));
    let mut searcher = Searcher::default();
    let scored: Vec<ScoredMove> = children(board)
        .map(|(mv, child)| ScoredMove {
            mv,
            value: searcher.value(&child, objective.flip()),
        })
        .collect();

    debug!(moves = scored.len(), nodes = searcher.nodes, "Analysis complete");
    scored
}
