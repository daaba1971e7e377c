use crate::search::frontiers::Frontier;

/// Last-in first-out frontier, used by depth first search.
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
