//! Fixed-capacity LIFO stack used by the bracket validator.
//!
//! Pushing onto a full stack and popping an empty one are reported as
//! [`StackError`] values; neither mutates the stack.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Failure modes of a bounded stack operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push attempted while the stack already holds `capacity` items.
    #[error("stack overflow: capacity of {capacity} reached")]
    Overflow { capacity: usize },

    /// Pop or peek attempted on an empty stack.
    #[error("stack underflow: stack is empty")]
    Underflow,
}

/// A last-in-first-out container holding at most `capacity` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

/// The stack the validator scans with.
pub type CharStack = BoundedStack<char>;

impl<T> BoundedStack<T> {
    /// Create an empty stack that holds at most `capacity` items.
    ///
    /// Storage grows on demand; `capacity` only bounds it.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Empty the stack.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push `item` as the new top.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The item is now on top
    /// * `Err(StackError::Overflow)` - The stack was full; nothing changed
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Borrow the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Underflow)
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Copy the current contents, top first.
    ///
    /// Unlike draining with `pop`, the stack is left as it was.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
