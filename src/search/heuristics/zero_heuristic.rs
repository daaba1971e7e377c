use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// The constant zero heuristic. A* with this heuristic expands states in the
/// same order as uniform cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}
