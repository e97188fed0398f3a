//! Single pass filtering with one element of lookahead.

use std::borrow::Borrow;

use crate::{filter::FilterRc, utils::Cursor, Error, Result};

/// Yields only the elements of the wrapped iterator accepted by a [`crate::filter::Filter`].
///
/// The next match is looked up eagerly, at construction and after every yield, so that
/// [`Cursor::has_next`] is a plain check that never touches the wrapped iterator. Presence of
/// the lookahead is tracked by an `Option`, so elements that are themselves "empty" (an empty
/// string, `None`, ...) are valid matches.
///
/// [`Cursor::remove`] is never supported: the wrapped iterator is always one match ahead of
/// the element handed out last.
pub struct Filtered<I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    inner: I,
    filter: FilterRc<T>,
    lookahead: Option<I::Item>,
}

impl<I, T> Filtered<I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    /// Wrap `iter`, keeping only elements accepted by `filter`
    pub fn new(iter: impl IntoIterator<IntoIter = I>, filter: FilterRc<T>) -> Self {
        let mut filtered = Filtered {
            inner: iter.into_iter(),
            filter,
            lookahead: None,
        };
        filtered.lookahead = filtered.next_match();
        filtered
    }

    fn next_match(&mut self) -> Option<I::Item> {
        let filter = &self.filter;
        self.inner
            .find(|item| filter.accept(Borrow::<T>::borrow(item)))
    }
}

impl<I, T> Iterator for Filtered<I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.lookahead.take()?;
        self.lookahead = self.next_match();
        Some(current)
    }
}

impl<I, T> Cursor for Filtered<I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    fn has_next(&mut self) -> bool {
        self.lookahead.is_some()
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::NotSupported)
    }
}
