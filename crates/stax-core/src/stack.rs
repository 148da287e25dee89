//! Named LIFO stacks
//!
//! The interpreter keeps two of these: the operand stack most words work on
//! and the scratch stack used by `push`/`pop`. Popping an empty stack is a
//! `StackFault` naming the stack, never a panic.

use crate::fault::Fault;

#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    name: &'static str,
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new(name: &'static str) -> Self {
        Stack {
            name,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pop the top item
    ///
    /// Stack effect: ( a -- )
    pub fn pop(&mut self) -> Result<T, Fault> {
        self.items
            .pop()
            .ok_or_else(|| Fault::stack(format!("{} stack underflow", self.name)))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove every item, top first
    pub fn drain_all(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..).rev()
    }

    /// Iterate bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut s = Stack::new("operand");
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow_names_stack() {
        let mut s: Stack<i32> = Stack::new("scratch");
        match s.pop() {
            Err(Fault::StackFault(msg)) => assert_eq!(msg, "scratch stack underflow"),
            other => panic!("Expected StackFault, got {:?}", other),
        }
    }

    #[test]
    fn test_drain_all_top_first() {
        let mut s = Stack::new("operand");
        s.push('a');
        s.push('b');
        let drained: Vec<_> = s.drain_all().collect();
        assert_eq!(drained, vec!['b', 'a']);
        assert!(s.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut s = Stack::new("operand");
        s.push(1);
        let snapshot = s.clone();
        s.push(2);
        assert_eq!(snapshot.len(), 1);
        assert_ne!(snapshot, s);
    }
}
