mod agent;
mod asynchronous;
mod prioritized_sweeping;
mod value_iteration;

pub use agent::ValueEstimationAgent;
pub use asynchronous::AsynchronousValueIterationAgent;
pub use prioritized_sweeping::PrioritizedSweepingAgent;
pub use value_iteration::ValueIterationAgent;
