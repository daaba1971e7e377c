use crate::search::{Plan, SearchProblem};
use indexmap::IndexSet;
use itertools::Itertools;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("action {action} at step {step} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is: {state}")]
    GoalNotReached { state: String },
}

/// Replay `plan` from the start state through the problem's successor
/// function and check that it can end in a goal state. Several successors of
/// a state may share an action label, so the replay follows all of them.
pub fn validate<P: SearchProblem>(
    plan: &Plan<P::Action>,
    problem: &P,
) -> Result<(), ValidationError>
where
    P::Action: PartialEq,
{
    let mut cur_states: IndexSet<P::State> = IndexSet::from([problem.start_state()]);
    for (step, action) in plan.steps().iter().enumerate() {
        let next_states: IndexSet<P::State> = cur_states
            .iter()
            .flat_map(|state| problem.successors(state))
            .filter(|successor| &successor.action == action)
            .map(|successor| successor.state)
            .collect();

        if next_states.is_empty() {
            return Err(ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: describe_states(&cur_states),
            });
        }
        cur_states = next_states;
    }

    if !cur_states.iter().any(|state| problem.is_goal(state)) {
        return Err(ValidationError::GoalNotReached {
            state: describe_states(&cur_states),
        });
    }

    Ok(())
}

fn describe_states<S: Debug>(states: &IndexSet<S>) -> String {
    states.iter().map(|state| format!("{:?}", state)).join(" or ")
}
