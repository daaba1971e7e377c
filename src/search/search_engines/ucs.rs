//! Uniform cost search

use crate::search::{
    frontiers::{Frontier, PriorityFunctionFrontier},
    search_engines::{SearchEngine, SearchResult},
    Heuristic, HeuristicValue, NodeId, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;

/// Dijkstra style graph search ordered by path cost. A state can be in the
/// frontier several times at different costs; only the cheapest entry is
/// expanded and the others are discarded when popped. With non-negative step
/// costs the first plan found is a cheapest one.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let mut frontier =
            PriorityFunctionFrontier::new(|&(g, _): &(HeuristicValue, NodeId)| g);
        let mut closed: HashSet<P::State> = HashSet::new();

        let root_id = search_space.get_root_id();
        frontier.push((search_space.get_node(root_id).get_g(), root_id));

        while let Some((g_value, node_id)) = frontier.pop() {
            let state = search_space.get_state(node_id);
            if closed.contains(state) {
                statistics.increment_pruned_nodes();
                continue;
            }
            if problem.is_goal(state) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(node_id)),
                    statistics,
                );
            }
            closed.insert(state.clone());

            statistics.increment_expanded_nodes();
            let successors = problem.successors(state);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if closed.contains(&successor.state) {
                    continue;
                }
                let child_g = g_value + successor.cost;
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost,
                    node_id,
                );
                frontier.push((child_g, child_id));
            }
        }

        statistics.finalise_search();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
