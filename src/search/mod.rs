mod explicit_graph;
pub mod frontiers;
pub mod heuristics;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use explicit_graph::{Edge, ExplicitGraph, GraphHeuristicName, TableHeuristic};
pub use heuristics::{FnHeuristic, Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{SearchProblem, Successor};
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;

use search_engines::{AStar, BFS, DFS, UCS};

/// Search the deepest nodes in the search tree first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Option<Plan<P::Action>> {
    DFS::new().search(problem, &mut ZeroHeuristic::new()).0.plan()
}

/// Search the shallowest nodes in the search tree first.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Option<Plan<P::Action>> {
    BFS::new().search(problem, &mut ZeroHeuristic::new()).0.plan()
}

/// Search the node of least total cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Option<Plan<P::Action>> {
    UCS::new().search(problem, &mut ZeroHeuristic::new()).0.plan()
}

/// Search the node that has the lowest combined cost and heuristic first.
pub fn a_star_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
) -> Option<Plan<P::Action>> {
    AStar::new().search(problem, heuristic).0.plan()
}
