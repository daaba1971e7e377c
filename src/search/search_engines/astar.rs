//! A* search

use crate::search::{
    frontiers::PriorityFrontier,
    search_engines::{SearchEngine, SearchResult},
    Heuristic, HeuristicValue, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::HashMap;

/// Best-first graph search ordered by `g + h`.
///
/// The closed list remembers the cost at which each state was expanded, and a
/// state is expanded again only when it is reached more cheaply. With an
/// admissible heuristic the returned plan is a cheapest one; with a consistent
/// heuristic no state is ever reopened.
#[derive(Debug, Default)]
pub struct AStar {
    check_consistency: bool,
}

impl AStar {
    pub fn new() -> Self {
        Self {
            check_consistency: false,
        }
    }

    /// Check `h(s) <= c(s, s') + h(s')` on every generated edge and report
    /// violations as warnings and in the statistics. The search itself is not
    /// affected.
    pub fn with_consistency_check(mut self) -> Self {
        self.check_consistency = true;
        self
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let start_state = problem.start_state();
        let start_h = heuristic.evaluate(&start_state, problem);
        let mut search_space = SearchSpace::new(start_state);
        let mut frontier = PriorityFrontier::new();
        let mut closed: HashMap<P::State, HeuristicValue> = HashMap::new();

        let root_id = search_space.get_root_id();
        frontier.push_with_priority(root_id, search_space.get_node(root_id).get_g() + start_h);

        while let Some((node_id, f_value)) = frontier.pop_with_priority() {
            let g_value = search_space.get_node(node_id).get_g();
            let state = search_space.get_state(node_id);
            match closed.get(state) {
                Some(&best_g) if g_value >= best_g => {
                    statistics.increment_pruned_nodes();
                    continue;
                }
                Some(_) => statistics.increment_reopened_nodes(),
                None => {}
            }
            if problem.is_goal(state) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(node_id)),
                    statistics,
                );
            }
            closed.insert(state.clone(), g_value);

            statistics.increment_expanded_nodes();
            let successors = problem.successors(state);
            statistics.increment_generated_nodes(successors.len());

            let successors: Vec<_> = successors
                .into_iter()
                .filter(|successor| {
                    closed
                        .get(&successor.state)
                        .map_or(true, |&best_g| g_value + successor.cost < best_g)
                })
                .collect();
            let child_states: Vec<P::State> = successors
                .iter()
                .map(|successor| successor.state.clone())
                .collect();
            let h_values = heuristic.evaluate_batch(&child_states, problem);

            let h_value = f_value - g_value;
            for (successor, child_h) in successors.into_iter().zip(h_values) {
                if self.check_consistency && h_value > child_h + successor.cost {
                    statistics.register_inconsistent_edge(
                        h_value.into_inner(),
                        successor.cost,
                        child_h.into_inner(),
                    );
                }
                let child_g = g_value + successor.cost;
                let child_id = search_space.insert_node(
                    successor.state,
                    successor.action,
                    successor.cost,
                    node_id,
                );
                frontier.push_with_priority(child_id, child_g + child_h);
            }
        }

        statistics.finalise_search();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search_engines::UCS, validate, ExplicitGraph, FnHeuristic, ZeroHeuristic};
    use crate::test_utils::*;

    #[test]
    fn astar_with_zero_heuristic_is_optimal() {
        let graph = long_cheap_short_expensive_graph();
        let (result, _) = AStar::new().search(&graph, &mut ZeroHeuristic::new());
        let plan = result.plan().unwrap();
        assert_eq!(plan.cost(&graph), 4.);
        assert!(validate(&plan, &graph).is_ok());
    }

    #[test]
    fn astar_with_admissible_heuristic_is_optimal_and_expands_less() {
        let grid = OpenGrid::new(12, 12, (0, 0), (11, 11)).with_walls(&[
            (5, 0),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (5, 5),
            (5, 6),
            (5, 7),
        ]);

        let (ucs_result, ucs_statistics) = UCS::new().search(&grid, &mut ZeroHeuristic::new());
        let (astar_result, astar_statistics) =
            AStar::new().search(&grid, &mut manhattan_heuristic());

        let ucs_plan = ucs_result.plan().unwrap();
        let astar_plan = astar_result.plan().unwrap();
        assert_eq!(astar_plan.cost(&grid), ucs_plan.cost(&grid));
        assert_eq!(astar_plan.len(), 22);
        assert!(validate(&astar_plan, &grid).is_ok());
        assert!(astar_statistics.expanded_nodes() <= ucs_statistics.expanded_nodes());
        assert_eq!(astar_statistics.reopened_nodes(), 0);
    }

    #[test]
    fn astar_reopens_states_reached_more_cheaply() {
        // h(b) is admissible but inconsistent, so c is first expanded via the
        // expensive route and reopened once the cheap route is found.
        let graph = reopening_graph();
        let mut heuristic = graph.table_heuristic();
        let (result, statistics) = AStar::new().search(&graph, &mut heuristic);
        let plan = result.plan().unwrap();
        assert_eq!(plan.steps(), &["s-b", "b-c", "c-g"]);
        assert_eq!(plan.cost(&graph), 4.);
        assert_eq!(statistics.reopened_nodes(), 1);
    }

    #[test]
    fn astar_consistency_check_only_reports() {
        let graph = reopening_graph();
        let (unchecked, _) = AStar::new().search(&graph, &mut graph.table_heuristic());
        let (checked, statistics) = AStar::new()
            .with_consistency_check()
            .search(&graph, &mut graph.table_heuristic());
        assert_eq!(unchecked, checked);
        assert!(statistics.inconsistent_edges() > 0);

        let grid = OpenGrid::new(4, 4, (0, 0), (3, 3));
        let (_, statistics) = AStar::new()
            .with_consistency_check()
            .search(&grid, &mut manhattan_heuristic());
        assert_eq!(statistics.inconsistent_edges(), 0);
    }

    #[test]
    fn astar_with_inadmissible_heuristic_may_be_suboptimal() {
        let graph = long_cheap_short_expensive_graph();
        let mut heuristic = FnHeuristic::new(|state: &String, _: &ExplicitGraph| match state.as_str() {
            "a" | "b" | "c" => 100.,
            _ => 0.,
        });
        let (result, _) = AStar::new().search(&graph, &mut heuristic);
        let plan = result.plan().unwrap();
        assert_eq!(plan.steps(), &["s-x", "x-g"]);
        assert!(validate(&plan, &graph).is_ok());
    }

    #[test]
    fn astar_reports_unsolvable() {
        let graph = unreachable_goal_graph();
        let (result, _) = AStar::new().search(&graph, &mut ZeroHeuristic::new());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }
}
