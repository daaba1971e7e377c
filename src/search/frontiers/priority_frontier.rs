use crate::search::{frontiers::Frontier, HeuristicValue};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    fmt::{self, Debug, Formatter},
    hash::Hash,
};

/// Min-priority frontier. Entries with equal priority are served in the order
/// they were first inserted.
///
/// This is an indexed heap: every item is held at most once and
/// [`PriorityFrontier::update`] is a real decrease-key. Searches that want
/// several entries for the same state give each entry its own identity (the
/// search engines push node ids, not states) and discard stale entries when
/// they are popped.
pub struct PriorityFrontier<T: Hash + Eq> {
    queue: PriorityQueue<T, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl<T: Hash + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Insert `item` with the given priority. An item that is already present
    /// has its priority overwritten.
    pub fn push_with_priority(&mut self, item: T, priority: HeuristicValue) {
        let sequence = self.next_sequence();
        self.queue.push(item, Reverse((priority, sequence)));
    }

    /// Lower the priority of `item` if it is already present with a worse
    /// priority, otherwise insert it. Returns whether the frontier changed.
    ///
    /// A reprioritised item keeps its original insertion position for tie
    /// breaking.
    pub fn update(&mut self, item: T, priority: HeuristicValue) -> bool {
        let current = self.queue.get_priority(&item).map(|Reverse(entry)| *entry);
        match current {
            Some((current, _)) if current <= priority => false,
            Some((_, sequence)) => {
                self.queue.change_priority(&item, Reverse((priority, sequence)));
                true
            }
            None => {
                self.push_with_priority(item, priority);
                true
            }
        }
    }

    /// Remove the item with the lowest priority together with that priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(item, Reverse((priority, _)))| (item, priority))
    }

    pub fn peek_priority(&self) -> Option<HeuristicValue> {
        self.queue.peek().map(|(_, Reverse((priority, _)))| *priority)
    }

    pub fn priority_of(&self, item: &T) -> Option<HeuristicValue> {
        self.queue
            .get_priority(item)
            .map(|Reverse((priority, _))| *priority)
    }

    pub fn peek_item(&self) -> Option<&T> {
        self.queue.peek().map(|(item, _)| item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.queue.get(item).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T: Hash + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Debug> Debug for PriorityFrontier<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityFrontier")
            .field("len", &self.queue.len())
            .field("next", &self.queue.peek())
            .finish()
    }
}

/// A priority frontier that computes the priority of an item from the item
/// itself when it is pushed. Unlike [`PriorityFrontier`], equal items pushed
/// twice are kept as two separate entries.
pub struct PriorityFunctionFrontier<T: Hash + Eq, F: Fn(&T) -> HeuristicValue> {
    /// Items are tagged with a push counter so that equal items stay distinct.
    frontier: PriorityFrontier<(u64, T)>,
    pushed: u64,
    priority_function: F,
}

impl<T: Hash + Eq, F: Fn(&T) -> HeuristicValue> PriorityFunctionFrontier<T, F> {
    pub fn new(priority_function: F) -> Self {
        Self {
            frontier: PriorityFrontier::new(),
            pushed: 0,
            priority_function,
        }
    }

    pub fn peek_priority(&self) -> Option<HeuristicValue> {
        self.frontier.peek_priority()
    }
}

impl<T: Hash + Eq, F: Fn(&T) -> HeuristicValue> Frontier<T> for PriorityFunctionFrontier<T, F> {
    fn push(&mut self, item: T) {
        let priority = (self.priority_function)(&item);
        self.frontier
            .push_with_priority((self.pushed, item), priority);
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.frontier
            .pop_with_priority()
            .map(|((_, item), _)| item)
    }

    fn peek(&self) -> Option<&T> {
        self.frontier.peek_item().map(|(_, item)| item)
    }

    fn len(&self) -> usize {
        self.frontier.len()
    }
}

impl<T: Hash + Eq + Debug, F: Fn(&T) -> HeuristicValue> Debug for PriorityFunctionFrontier<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityFunctionFrontier")
            .field("frontier", &self.frontier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hv(value: f64) -> HeuristicValue {
        HeuristicValue::from(value)
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push_with_priority("c", hv(3.));
        frontier.push_with_priority("a", hv(1.));
        frontier.push_with_priority("b", hv(2.));
        assert_eq!(frontier.peek_item(), Some(&"a"));
        assert_eq!(frontier.peek_priority(), Some(hv(1.)));
        assert_eq!(frontier.pop_with_priority(), Some(("a", hv(1.))));
        assert_eq!(frontier.pop_with_priority(), Some(("b", hv(2.))));
        assert_eq!(frontier.pop_with_priority(), Some(("c", hv(3.))));
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_are_broken_by_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for item in ["first", "second", "third", "fourth"] {
            frontier.push_with_priority(item, hv(0.));
        }
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop_with_priority())
            .map(|(item, _)| item)
            .collect();
        assert_eq!(order, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn update_only_improves_priorities() {
        let mut frontier = PriorityFrontier::new();
        frontier.push_with_priority("x", hv(5.));
        frontier.push_with_priority("y", hv(3.));

        // Worse or equal priorities are ignored.
        assert!(!frontier.update("x", hv(7.)));
        assert!(!frontier.update("x", hv(5.)));
        assert_eq!(frontier.priority_of(&"x"), Some(hv(5.)));

        // A better priority moves the item forward.
        assert!(frontier.update("x", hv(1.)));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_with_priority(), Some(("x", hv(1.))));

        // Absent items are inserted.
        assert!(frontier.update("z", hv(4.)));
        assert!(frontier.contains(&"z"));
        assert_eq!(frontier.pop_with_priority(), Some(("y", hv(3.))));
        assert_eq!(frontier.pop_with_priority(), Some(("z", hv(4.))));
    }

    #[test]
    fn reprioritised_items_keep_their_insertion_position() {
        let mut frontier = PriorityFrontier::new();
        frontier.push_with_priority("early", hv(9.));
        frontier.push_with_priority("late", hv(2.));
        frontier.update("early", hv(2.));
        assert_eq!(frontier.pop_with_priority(), Some(("early", hv(2.))));
        assert_eq!(frontier.pop_with_priority(), Some(("late", hv(2.))));
    }

    #[test]
    fn function_frontier_computes_priority_on_push() {
        let mut frontier = PriorityFunctionFrontier::new(|&(cost, _): &(HeuristicValue, u32)| cost);
        frontier.push((hv(4.), 0));
        frontier.push((hv(1.), 1));
        frontier.push((hv(2.5), 2));
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.peek(), Some(&(hv(1.), 1)));
        assert_eq!(frontier.peek_priority(), Some(hv(1.)));
        assert_eq!(frontier.pop(), Some((hv(1.), 1)));
        assert_eq!(frontier.pop(), Some((hv(2.5), 2)));
        assert_eq!(frontier.pop(), Some((hv(4.), 0)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn function_frontier_keeps_equal_items_apart() {
        let mut frontier = PriorityFunctionFrontier::new(|&(cost, _): &(HeuristicValue, &str)| cost);
        frontier.push((hv(3.), "s"));
        frontier.push((hv(1.), "t"));
        frontier.push((hv(3.), "s"));
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some((hv(1.), "t")));
        assert_eq!(frontier.pop(), Some((hv(3.), "s")));
        assert_eq!(frontier.pop(), Some((hv(3.), "s")));
        assert!(frontier.is_empty());
    }
}
