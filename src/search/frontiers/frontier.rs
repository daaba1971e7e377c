pub trait Frontier<T> {
    /// Add an item to the frontier.
    fn push(&mut self, item: T);

    /// Remove and return the next item to expand, or `None` if the frontier
    /// is empty.
    fn pop(&mut self) -> Option<T>;

    /// The item [`Frontier::pop`] would return next, without removing it.
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
