//! Frontiers (or fringes) hold the discovered but not yet expanded entries of
//! a search. The engines only differ in which frontier they use and when they
//! close states.

mod frontier;
mod priority_frontier;
mod queue_frontier;
mod stack_frontier;

pub use frontier::Frontier;
pub use priority_frontier::{PriorityFrontier, PriorityFunctionFrontier};
pub use queue_frontier::QueueFrontier;
pub use stack_frontier::StackFrontier;
