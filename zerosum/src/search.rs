use tracing::trace;

use crate::{Evaluation, State};

/// Finds the successor of `state` that leads to the best evaluation after
/// looking `depth` plies ahead.
///
/// If `find_min` is set, the side to move is the one that wants the evaluation
/// to be as small as possible, otherwise as large as possible. Both sides are
/// assumed to play optimally.
///
/// Returns `None` as the successor if `state` has no successors or `depth` is zero.
/// Among equally good successors, the first one in [`State::next()`] order is chosen.
pub fn min_max<S: State>(state: &S, depth: u32, find_min: bool) -> (Option<S>, Evaluation) {
    // The root must keep looking until it finds a forced result.
    let (next, eval) = if find_min {
        search(state, depth, Evaluation::LOST, true)
    } else {
        search(state, depth, Evaluation::WON, false)
    };
    trace!(depth, find_min, %eval, found = next.is_some(), "Search finished");
    (next, eval)
}

/// A successor of the root together with its score.
#[derive(Debug)]
pub struct RankedMove<S> {
    pub state: S,
    /// The best answer of the opponent, if there is one.
    pub reply: Option<S>,
    pub eval: Evaluation,
}

/// Scores every successor of `state` on its own, by searching `depth` plies
/// below each of them.
///
/// Unlike [`min_max()`], no successor is skipped, which makes this useful for
/// explaining a decision. The result is in [`State::next()`] order.
pub fn rank_successors<S: State>(state: &S, depth: u32, find_min: bool) -> Vec<RankedMove<S>> {
    state
        .next()
        .into_iter()
        .map(|t| {
            let (reply, eval) = min_max(&t, depth, !find_min);
            RankedMove {
                state: t,
                reply,
                eval,
            }
        })
        .collect()
}

fn search<S: State>(
    state: &S,
    depth: u32,
    bound: Evaluation,
    minimizing: bool,
) -> (Option<S>, Evaluation) {
    if depth == 0 {
        return (None, state.eval());
    }
    let successors = state.next();
    if successors.is_empty() {
        return (None, state.eval());
    }

    let mut best = if minimizing {
        Evaluation::WON
    } else {
        Evaluation::LOST
    };
    let mut chosen = None;
    for t in successors {
        let (_, eval) = search(&t, depth - 1, best, !minimizing);
        let improves = if minimizing { eval < best } else { eval > best };
        if chosen.is_none() || improves {
            chosen = Some(t);
            best = eval;
            // The parent already has an alternative at least as good for it.
            let cutoff = if minimizing {
                best <= bound
            } else {
                best >= bound
            };
            if cutoff {
                break;
            }
        }
    }
    (chosen, best)
}
