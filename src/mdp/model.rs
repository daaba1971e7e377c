//! The [`Mdp`] trait is everything the planning agents know about a Markov
//! decision process.

use std::fmt::Debug;
use std::hash::Hash;

pub trait Mdp {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    /// Every state of the process. Cyclic value iteration visits the states
    /// in this order.
    fn states(&self) -> Vec<Self::State>;

    /// The legal actions in `state`, empty if and only if `state` is
    /// terminal. Policies break ties in favour of earlier actions.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// `(next state, probability)` pairs for taking `action` in `state`. The
    /// probabilities are expected to sum to 1; this is not checked.
    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
