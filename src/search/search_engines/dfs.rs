//! Depth first search

use crate::search::{
    frontiers::{Frontier, StackFrontier},
    search_engines::{SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;

/// Graph search with an explicit stack. States are closed when they are
/// popped, so the returned plan is neither the shortest nor the cheapest.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let mut frontier = StackFrontier::new();
        let mut closed: HashSet<P::State> = HashSet::new();

        frontier.push(search_space.get_root_id());

        while let Some(node_id) = frontier.pop() {
            let state = search_space.get_state(node_id);
            if closed.contains(state) {
                statistics.increment_pruned_nodes();
                continue;
            }
            closed.insert(state.clone());

            if problem.is_goal(state) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(node_id)),
                    statistics,
                );
            }

            statistics.increment_expanded_nodes();
            let successors = problem.successors(state);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost,
                    node_id,
                );
                frontier.push(child_id);
            }
        }

        statistics.finalise_search();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
