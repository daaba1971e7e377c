use crate::mdp::{BellmanBackup, Mdp, PlanningStatistics, ValueFunction};

/// An agent that has planned a value function for an MDP and acts greedily
/// with respect to it.
pub trait ValueEstimationAgent<M: Mdp> {
    fn bellman(&self) -> BellmanBackup<'_, M>;

    fn values(&self) -> &ValueFunction<M::State>;

    fn statistics(&self) -> &PlanningStatistics;

    /// The planned value of `state`, 0 for states that were never updated.
    fn value(&self, state: &M::State) -> f64 {
        self.values().get(state)
    }

    /// The Q-value of `action` in `state` under the planned values.
    fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.bellman().q_value(self.values(), state, action)
    }

    /// The greedy action in `state`, `None` in terminal states. Ties go to
    /// the action the MDP lists first.
    fn policy(&self, state: &M::State) -> Option<M::Action> {
        self.bellman().best_action(self.values(), state)
    }

    fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }
}
