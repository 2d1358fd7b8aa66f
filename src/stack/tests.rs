//! Tests for the bounded stack.

use super::{BoundedStack, CharStack, DEFAULT_CAPACITY, StackError};

#[test]
fn test_new_stack_is_empty() {
    let stack = CharStack::new(4);

    assert!(stack.is_empty());
    assert!(!stack.is_full());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.capacity(), 4);
}

#[test]
fn test_default_capacity() {
    let stack: CharStack = BoundedStack::default();
    assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
    assert_eq!(DEFAULT_CAPACITY, 100);
}

#[test]
fn test_push_pop_is_lifo() {
    let mut stack = CharStack::new(3);
    stack.push('(').unwrap();
    stack.push('[').unwrap();
    stack.push('{').unwrap();

    assert_eq!(stack.pop(), Ok('{'));
    assert_eq!(stack.pop(), Ok('['));
    assert_eq!(stack.pop(), Ok('('));
    assert!(stack.is_empty());
}

#[test]
fn test_push_on_full_stack_overflows_without_mutation() {
    let mut stack = CharStack::new(2);
    stack.push('(').unwrap();
    stack.push('[').unwrap();
    assert!(stack.is_full());

    let err = stack.push('{').unwrap_err();

    assert_eq!(err, StackError::Overflow { capacity: 2 });
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Ok(&'['));
}

#[test]
fn test_pop_on_empty_stack_underflows() {
    let mut stack = CharStack::new(2);
    assert_eq!(stack.pop(), Err(StackError::Underflow));
    assert!(stack.is_empty());
}

#[test]
fn test_peek_does_not_mutate() {
    let mut stack = CharStack::new(2);
    assert_eq!(stack.peek(), Err(StackError::Underflow));

    stack.push('{').unwrap();
    assert_eq!(stack.peek(), Ok(&'{'));
    assert_eq!(stack.peek(), Ok(&'{'));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_snapshot_is_top_to_bottom_and_non_destructive() {
    let mut stack = CharStack::new(5);
    for c in ['(', '{', '['] {
        stack.push(c).unwrap();
    }

    assert_eq!(stack.snapshot(), vec!['[', '{', '(']);
    // Taking a snapshot twice yields the same contents.
    assert_eq!(stack.snapshot(), vec!['[', '{', '(']);
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_reset_empties_stack() {
    let mut stack = CharStack::new(3);
    stack.push('(').unwrap();
    stack.push('(').unwrap();

    stack.reset();

    assert!(stack.is_empty());
    assert!(stack.snapshot().is_empty());
    // Capacity is unchanged, so the stack can be refilled.
    stack.push('[').unwrap();
    stack.push('[').unwrap();
    stack.push('[').unwrap();
    assert!(stack.is_full());
}

#[test]
fn test_zero_capacity_stack_is_always_full() {
    let mut stack: BoundedStack<char> = BoundedStack::new(0);
    assert!(stack.is_empty());
    assert!(stack.is_full());
    assert_eq!(stack.push('('), Err(StackError::Overflow { capacity: 0 }));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        StackError::Overflow { capacity: 100 }.to_string(),
        "stack overflow: capacity of 100 reached"
    );
    assert_eq!(
        StackError::Underflow.to_string(),
        "stack underflow: stack is empty"
    );
}
