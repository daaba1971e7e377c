use crate::search::frontiers::Frontier;
use std::collections::VecDeque;

/// First-in first-out frontier, used by breadth first search.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
