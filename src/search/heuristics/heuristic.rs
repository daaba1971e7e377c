use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use std::fmt::{self, Debug, Formatter};

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Nothing checks that a heuristic is admissible. Handing an overestimating
/// heuristic to A* is not an error, it only forfeits the optimality of the
/// returned plan. See [`AStar::with_consistency_check`] for an opt-in check.
///
/// [`AStar::with_consistency_check`]: crate::search::search_engines::AStar::with_consistency_check
pub trait Heuristic<P: SearchProblem>: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;

    /// Evaluate a batch of states with respect to the given problem. The
    /// default implementation simply calls `evaluate` for each state
    /// sequentially. This method should be overridden if a more efficient
    /// implementation is possible.
    fn evaluate_batch(&mut self, states: &[P::State], problem: &P) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(state, problem))
            .collect()
    }
}

/// Adapts a plain function or closure into a [`Heuristic`].
pub struct FnHeuristic<F> {
    function: F,
}

impl<F> FnHeuristic<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Debug for FnHeuristic<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHeuristic").finish_non_exhaustive()
    }
}

impl<P, F> Heuristic<P> for FnHeuristic<F>
where
    P: SearchProblem,
    F: FnMut(&P::State, &P) -> f64,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        (self.function)(state, problem).into()
    }
}
