//! The [`SearchProblem`] trait is the only thing the search engines know about
//! a domain. States are opaque values that only need equality and hashing,
//! actions are opaque labels.

use std::fmt::Debug;
use std::hash::Hash;

/// A single outgoing edge of a state, as produced by
/// [`SearchProblem::successors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    /// Non-negative cost of taking `action`.
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A> From<(S, A, f64)> for Successor<S, A> {
    fn from((state, action, cost): (S, A, f64)) -> Self {
        Self::new(state, action, cost)
    }
}

pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Returns true if and only if `state` is a goal state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(successor, action, step cost)` triples leaving `state`. The order
    /// of the returned successors is the order in which the engines push them.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a sequence of legal actions taken from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> f64;
}
