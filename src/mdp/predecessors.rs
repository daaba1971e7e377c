use crate::mdp::Mdp;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::hash::Hash;

/// For every state, the states that reach it with non-zero probability under
/// some action. Built once and read-only afterwards. Predecessors are kept in
/// the order they were discovered, so iterating them is deterministic.
#[derive(Debug, Clone)]
pub struct PredecessorIndex<S: Eq + Hash> {
    predecessors: HashMap<S, IndexSet<S>>,
}

impl<S: Clone + Eq + Hash> PredecessorIndex<S> {
    pub fn new<M: Mdp<State = S>>(mdp: &M) -> Self {
        let mut predecessors: HashMap<S, IndexSet<S>> = HashMap::new();
        for state in mdp.states() {
            for action in mdp.actions(&state) {
                for (next_state, probability) in mdp.transitions(&state, &action) {
                    if probability > 0. {
                        predecessors
                            .entry(next_state)
                            .or_default()
                            .insert(state.clone());
                    }
                }
            }
        }
        Self { predecessors }
    }

    /// The predecessors of `state`, empty if nothing reaches it.
    pub fn predecessors(&self, state: &S) -> impl Iterator<Item = &S> {
        self.predecessors.get(state).into_iter().flatten()
    }

    pub fn contains(&self, state: &S, predecessor: &S) -> bool {
        self.predecessors
            .get(state)
            .is_some_and(|predecessors| predecessors.contains(predecessor))
    }

    /// Number of states with at least one predecessor.
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }
}
