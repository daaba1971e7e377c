use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from states to values. States that were never assigned a value
/// are worth 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFunction<S: Eq + Hash> {
    values: HashMap<S, f64>,
}

impl<S: Eq + Hash> Default for ValueFunction<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> ValueFunction<S> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// The value of `state`, 0 if it has never been set.
    pub fn get(&self, state: &S) -> f64 {
        self.values.get(state).copied().unwrap_or(0.)
    }

    /// Set the value of `state`, returning by how much it changed.
    pub fn set(&mut self, state: S, value: f64) -> f64 {
        let previous = self.values.insert(state, value).unwrap_or(0.);
        (value - previous).abs()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.values.iter().map(|(state, &value)| (state, value))
    }

    /// Number of states with an explicitly stored value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest absolute difference to `other` over the states known to
    /// either function.
    pub fn max_difference(&self, other: &ValueFunction<S>) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|state| (self.get(state) - other.get(state)).abs())
            .fold(0., f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_states_default_to_zero() {
        let mut values = ValueFunction::new();
        assert_eq!(values.get(&"anything"), 0.);
        assert!(values.is_empty());
        assert_eq!(values.set("a", 2.5), 2.5);
        assert_eq!(values.set("a", 1.), 1.5);
        assert_eq!(values.get(&"a"), 1.);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn max_difference_covers_both_key_sets() {
        let mut left = ValueFunction::new();
        left.set("a", 1.);
        let mut right = ValueFunction::new();
        right.set("a", 1.5);
        right.set("b", -3.);
        assert_eq!(left.max_difference(&right), 3.);
        assert_eq!(right.max_difference(&left), 3.);
        assert_eq!(left.max_difference(&left), 0.);
    }
}
