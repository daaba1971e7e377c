//! Synchronous value iteration

use crate::mdp::{
    agents::ValueEstimationAgent, BellmanBackup, Mdp, PlanningError, PlanningStatistics,
    ValueFunction,
};

/// Runs `iterations` batch sweeps over all states. Each sweep computes a new
/// value function from the previous one only, and replaces it when done.
#[derive(Debug)]
pub struct ValueIterationAgent<'a, M: Mdp> {
    backup: BellmanBackup<'a, M>,
    values: ValueFunction<M::State>,
    statistics: PlanningStatistics,
}

impl<'a, M: Mdp> ValueIterationAgent<'a, M> {
    pub fn new(mdp: &'a M, discount: f64, iterations: usize) -> Result<Self, PlanningError> {
        let backup = BellmanBackup::new(mdp, discount)?;
        let mut statistics = PlanningStatistics::new();
        let states = mdp.states();
        let mut values = ValueFunction::new();

        for _ in 0..iterations {
            let mut next_values = ValueFunction::new();
            let mut max_change: f64 = 0.;
            for state in &states {
                if mdp.is_terminal(state) {
                    continue;
                }
                let value = backup.max_q_value(&values, state)?;
                let change = (value - values.get(state)).abs();
                max_change = max_change.max(change);
                statistics.register_backup(change);
                next_values.set(state.clone(), value);
            }
            values = next_values;
            statistics.finish_iteration(max_change);
        }

        statistics.finalise_planning();
        Ok(Self {
            backup,
            values,
            statistics,
        })
    }
}

impl<'a, M: Mdp> ValueEstimationAgent<M> for ValueIterationAgent<'a, M> {
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
