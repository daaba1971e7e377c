//! Breadth first search

use crate::search::{
    frontiers::{Frontier, QueueFrontier},
    search_engines::{SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;

/// Graph search with a FIFO frontier. States are closed as soon as they are
/// generated, so each state enters the frontier at most once and the first
/// plan found has the fewest actions.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let start_state = problem.start_state();
        let mut closed: HashSet<P::State> = HashSet::from([start_state.clone()]);
        let mut search_space = SearchSpace::new(start_state);
        let mut frontier = QueueFrontier::new();

        frontier.push(search_space.get_root_id());

        while let Some(node_id) = frontier.pop() {
            let state = search_space.get_state(node_id);
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
                if !closed.insert(successor.state.clone()) {
                    continue;
                }
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
