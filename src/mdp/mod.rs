//! Planning in Markov decision processes by value iteration.

pub mod agents;
mod bellman;
mod config;
mod error;
mod model;
mod planning_statistics;
mod predecessors;
mod tabular;
mod value_function;

pub use agents::{
    AsynchronousValueIterationAgent, PrioritizedSweepingAgent, ValueEstimationAgent,
    ValueIterationAgent,
};
pub use bellman::BellmanBackup;
pub use config::{PlanningConfig, PlanningVariant};
pub use error::PlanningError;
pub use model::Mdp;
pub use planning_statistics::PlanningStatistics;
pub use predecessors::PredecessorIndex;
pub use tabular::{Outcome, TabularMdp};
pub use value_function::ValueFunction;
