//! Asynchronous (cyclic) value iteration

use crate::mdp::{
    agents::ValueEstimationAgent, BellmanBackup, Mdp, PlanningError, PlanningStatistics,
    ValueFunction,
};

/// Updates one state per iteration, cycling through the states in the order
/// the MDP lists them. Updates happen in place, so later states in a cycle
/// see the values written earlier in the same cycle. A terminal state uses
/// up its iteration without being updated.
#[derive(Debug)]
pub struct AsynchronousValueIterationAgent<'a, M: Mdp> {
    backup: BellmanBackup<'a, M>,
    values: ValueFunction<M::State>,
    statistics: PlanningStatistics,
}

impl<'a, M: Mdp> AsynchronousValueIterationAgent<'a, M> {
    pub fn new(mdp: &'a M, discount: f64, iterations: usize) -> Result<Self, PlanningError> {
        let backup = BellmanBackup::new(mdp, discount)?;
        let mut statistics = PlanningStatistics::new();
        let states = mdp.states();
        let mut values = ValueFunction::new();

        if !states.is_empty() {
            for iteration in 0..iterations {
                let state = &states[iteration % states.len()];
                let mut change = 0.;
                if !mdp.is_terminal(state) {
                    let value = backup.max_q_value(&values, state)?;
                    change = values.set(state.clone(), value);
                    statistics.register_backup(change);
                }
                statistics.finish_iteration(change);
            }
        }

        statistics.finalise_planning();
        Ok(Self {
            backup,
            values,
            statistics,
        })
    }
}

impl<'a, M: Mdp> ValueEstimationAgent<M> for AsynchronousValueIterationAgent<'a, M> {
    fn bellman(&self) -> BellmanBackup<'_, M> {
        self.backup
    }

    fn values(&self) -> &ValueFunction<M::State> {
        &self.values
    }

    fn statistics(&self) -> &PlanningStatistics {
        &self.statistics
    }
}
