//! Prioritized sweeping value iteration

use crate::mdp::{
    agents::ValueEstimationAgent, BellmanBackup, Mdp, PlanningError, PlanningStatistics,
    PredecessorIndex, ValueFunction,
};
use crate::search::{frontiers::PriorityFrontier, HeuristicValue};
use tracing::debug;

/// Updates the state with the largest Bellman residual first. After each
/// update the residuals of the state's predecessors are recomputed, and a
/// predecessor is queued (or moved forward) when its residual exceeds
/// `theta`. Terminal states are never queued.
///
/// One iteration of the budget is one pop and update. Planning stops early
/// when no state is left in the queue.
#[derive(Debug)]
pub struct PrioritizedSweepingAgent<'a, M: Mdp> {
    backup: BellmanBackup<'a, M>,
    values: ValueFunction<M::State>,
    statistics: PlanningStatistics,
}

impl<'a, M: Mdp> PrioritizedSweepingAgent<'a, M> {
    pub fn new(
        mdp: &'a M,
        discount: f64,
        iterations: usize,
        theta: f64,
    ) -> Result<Self, PlanningError> {
        if theta.is_nan() || theta < 0. {
            return Err(PlanningError::InvalidTheta(theta));
        }
        let backup = BellmanBackup::new(mdp, discount)?;
        let mut statistics = PlanningStatistics::new();
        let predecessors = PredecessorIndex::new(mdp);
        let mut values = ValueFunction::new();

        // The queue is a min-queue, so residuals are negated to serve the
        // largest first.
        let mut frontier = PriorityFrontier::new();
        for state in mdp.states() {
            if mdp.is_terminal(&state) {
                continue;
            }
            let (_, residual) = backup.residual(&values, &state)?;
            frontier.push_with_priority(state, HeuristicValue::from(-residual));
        }

        for _ in 0..iterations {
            let Some((state, _)) = frontier.pop_with_priority() else {
                debug!("no state left to update, stopping early");
                break;
            };
            let value = backup.max_q_value(&values, &state)?;
            let change = values.set(state.clone(), value);
            statistics.register_backup(change);

            for predecessor in predecessors.predecessors(&state) {
                if mdp.is_terminal(predecessor) {
                    continue;
                }
                let (_, residual) = backup.residual(&values, predecessor)?;
                if residual > theta {
                    frontier.update(predecessor.clone(), HeuristicValue::from(-residual));
                }
            }
            statistics.finish_iteration(change);
        }

        statistics.finalise_planning();
        Ok(Self {
            backup,
            values,
            statistics,
        })
    }
}

impl<'a, M: Mdp> ValueEstimationAgent<M> for PrioritizedSweepingAgent<'a, M> {
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
