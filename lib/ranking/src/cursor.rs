//! Column-scoped sequential reader
//!
//! Hands out a column's items (feature vectors, then scores) in the order
//! candidates are met during traversal. One cursor serves exactly one column.

use linkrank_core::{Error, Result};

#[derive(Debug)]
pub struct AlignmentCursor<'a, T> {
    column: usize,
    items: &'a [T],
    position: usize,
}

impl<'a, T> AlignmentCursor<'a, T> {
    pub fn new(column: usize, items: &'a [T]) -> Self {
        Self {
            column,
            items,
            position: 0,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of items handed out so far
    pub fn consumed(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// Next unconsumed item. Fails once the column is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&'a T> {
        let item = self.items.get(self.position).ok_or(Error::AlignmentOverrun {
            column: self.column,
            available: self.items.len(),
        })?;
        self.position += 1;
        Ok(item)
    }

    /// Check that every item was consumed
    pub fn finish(&self) -> Result<()> {
        if self.position != self.items.len() {
            return Err(Error::AlignmentUnderrun {
                column: self.column,
                expected: self.items.len(),
                consumed: self.position,
            });
        }
        Ok(())
    }
}
