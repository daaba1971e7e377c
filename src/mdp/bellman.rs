use crate::mdp::{Mdp, PlanningError, ValueFunction};

/// The Bellman optimality backup of an MDP under a fixed discount.
///
/// `Q(s, a) = sum over s' of P(s' | s, a) * (R(s, a, s') + discount * V(s'))`
/// and `V(s) = max over a of Q(s, a)` for non-terminal `s`.
#[derive(Debug)]
pub struct BellmanBackup<'a, M: Mdp> {
    mdp: &'a M,
    discount: f64,
}

impl<'a, M: Mdp> Clone for BellmanBackup<'a, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: Mdp> Copy for BellmanBackup<'a, M> {}

impl<'a, M: Mdp> BellmanBackup<'a, M> {
    pub fn new(mdp: &'a M, discount: f64) -> Result<Self, PlanningError> {
        if !(0. ..1.).contains(&discount) {
            return Err(PlanningError::InvalidDiscount(discount));
        }
        Ok(Self { mdp, discount })
    }

    pub fn mdp(&self) -> &'a M {
        self.mdp
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn q_value(
        &self,
        values: &ValueFunction<M::State>,
        state: &M::State,
        action: &M::Action,
    ) -> f64 {
        self.mdp
            .transitions(state, action)
            .iter()
            .map(|(next_state, probability)| {
                probability
                    * (self.mdp.reward(state, action, next_state)
                        + self.discount * values.get(next_state))
            })
            .sum()
    }

    /// `max over a of Q(state, a)`. Must not be called on terminal states.
    pub fn max_q_value(
        &self,
        values: &ValueFunction<M::State>,
        state: &M::State,
    ) -> Result<f64, PlanningError> {
        let actions = self.mdp.actions(state);
        if actions.is_empty() {
            return Err(PlanningError::NoLegalActions {
                state: format!("{:?}", state),
            });
        }
        Ok(actions
            .iter()
            .map(|action| self.q_value(values, state, action))
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// `max over a of Q(state, a)` together with its distance to the current
    /// value of `state`.
    pub fn residual(
        &self,
        values: &ValueFunction<M::State>,
        state: &M::State,
    ) -> Result<(f64, f64), PlanningError> {
        let max_q = self.max_q_value(values, state)?;
        Ok((max_q, (values.get(state) - max_q).abs()))
    }

    /// The action maximising `Q(state, ·)`, ties going to the action listed
    /// first. `None` for terminal states and states without actions.
    pub fn best_action(
        &self,
        values: &ValueFunction<M::State>,
        state: &M::State,
    ) -> Option<M::Action> {
        if self.mdp.is_terminal(state) {
            return None;
        }
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.actions(state) {
            let q_value = self.q_value(values, state, &action);
            if best
                .as_ref()
                .map_or(true, |(_, best_q_value)| q_value > *best_q_value)
            {
                best = Some((action, q_value));
            }
        }
        best.map(|(action, _)| action)
    }
}
