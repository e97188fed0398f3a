//! The [`Cursor`] abstraction and the two leaf cursors.

use std::iter::Peekable;

use crate::{Error, Result};

/// An [`Iterator`] that can answer "is there more" without consuming anything and may
/// support removing the element it yielded last.
pub trait Cursor: Iterator {
    /// Returns `true` if the next call to [`Iterator::next`] yields an element.
    ///
    /// Never consumes an element, though implementations may buffer one.
    fn has_next(&mut self) -> bool;

    /// Remove the element returned by the most recent call to [`Iterator::next`].
    ///
    /// # Errors
    /// Returns [`Error::NotSupported`] if the cursor cannot identify the last yielded
    /// position, and [`Error::IllegalState`] if nothing has been yielded since the last
    /// removal.
    fn remove(&mut self) -> Result<()> {
        Err(Error::NotSupported)
    }
}

/// A cursor over any iterator, using a one element peek. Does not support removal.
pub struct IterCursor<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap an iterator
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterCursor {
            inner: iter.into_iter().peekable(),
        }
    }
}

impl<I: Iterator> Iterator for IterCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }
}

/// A cursor that owns a vector, yields clones of its elements, and supports removal.
///
/// The remaining elements are available through [`VecCursor::into_inner`].
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
    removable: bool,
}

impl<T: Clone> VecCursor<T> {
    /// Create a cursor positioned before the first element
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        VecCursor {
            items,
            position: 0,
            removable: false,
        }
    }

    /// The elements that have not been removed
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Iterator for VecCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        self.removable = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.position;
        (left, Some(left))
    }
}

impl<T: Clone> Cursor for VecCursor<T> {
    fn has_next(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn remove(&mut self) -> Result<()> {
        if !self.removable {
            return Err(Error::IllegalState("nothing to remove"));
        }

        self.position -= 1;
        self.items.remove(self.position);
        self.removable = false;
        Ok(())
    }
}
