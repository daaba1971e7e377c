mod heuristic;
mod zero_heuristic;

pub use heuristic::{FnHeuristic, Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
