//! Fixed-capacity FIFO used as the breadth-first frontier.
//!
//! The buffer is a flat slice with `front` and `rear` cursors that only move
//! forward. When `rear` reaches the physical end while `front` has advanced,
//! the live elements are shifted back to the start before the next insert.
//! The queue is full only when every physical slot holds a live element.

use std::fmt::Display;
use std::io::Write;

use crate::errors::{GraphError, Result};

/// A bounded first-in first-out queue.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    buffer: Vec<Option<T>>,
    front: usize,
    rear: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            front: 0,
            rear: 0,
        }
    }

    /// Appends an element at the back.
    ///
    /// Fails with [`GraphError::Capacity`] when all slots are occupied.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.rear == self.buffer.len() {
            if self.front == 0 {
                return Err(GraphError::Capacity {
                    what: "queue",
                    limit: self.buffer.len(),
                });
            }
            self.compact();
        }

        self.buffer[self.rear] = Some(item);
        self.rear += 1;
        Ok(())
    }

    /// Removes and returns the element at the front.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.front].take();
        self.front += 1;
        item
    }

    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.front].as_ref()
    }

    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.rear - 1].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.rear - self.front
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Iterates live elements from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer[self.front..self.rear].iter().flatten()
    }

    /// Moves the live range `front..rear` to the start of the buffer.
    fn compact(&mut self) {
        self.buffer.rotate_left(self.front);
        self.rear -= self.front;
        self.front = 0;
    }
}

impl<T: Display> BoundedQueue<T> {
    /// Writes every element front to back, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;
        for item in self.iter() {
            let text = item.to_string();
            out.write_all(text.as_bytes())?;
            written += text.len();
        }
        Ok(written)
    }
}
