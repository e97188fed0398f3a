//! Traversal of several cursors, one after another.

use crate::{utils::Cursor, Error, Result};

/// Which cursor produced the element returned last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastFrom {
    Nothing,
    Current,
    Retired,
}

/// Yields every element of sub-cursor `n` before moving on to sub-cursor `n + 1`.
///
/// Sub-cursors are pulled from the outer iterator lazily, so at most the current one (and,
/// for [`Cursor::remove`], the one that yielded the previous element) is alive at any time.
/// Empty sub-cursors are skipped.
///
/// # Examples
///
/// ```rust
/// use jlscope::utils::{Cursor, IterCursor, Sequential};
///
/// let mut seq = Sequential::new(vec![
///     IterCursor::new(vec![1, 2]),
///     IterCursor::new(vec![]),
///     IterCursor::new(vec![3]),
/// ]);
/// assert!(seq.has_next());
/// assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct Sequential<O, C>
where
    O: Iterator<Item = C>,
    C: Cursor,
{
    cursors: O,
    current: Option<C>,
    retired: Option<C>,
    last: LastFrom,
}

impl<O, C> Sequential<O, C>
where
    O: Iterator<Item = C>,
    C: Cursor,
{
    /// Create a new sequential cursor over the given sub-cursors
    pub fn new(cursors: impl IntoIterator<IntoIter = O>) -> Self {
        let mut cursors = cursors.into_iter();
        let current = cursors.next();
        Sequential {
            cursors,
            current,
            retired: None,
            last: LastFrom::Nothing,
        }
    }

    /// Move to the first sub-cursor that has elements left. Returns `false` once all
    /// sub-cursors are exhausted.
    fn advance(&mut self) -> bool {
        loop {
            let has_next = match self.current.as_mut() {
                None => return false,
                Some(cursor) => cursor.has_next(),
            };
            if has_next {
                return true;
            }

            let finished = self.current.take();
            if self.last == LastFrom::Current {
                self.retired = finished;
                self.last = LastFrom::Retired;
            }
            self.current = self.cursors.next();
        }
    }
}

impl<O, C> Iterator for Sequential<O, C>
where
    O: Iterator<Item = C>,
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }

        let item = self.current.as_mut().and_then(Iterator::next);
        if item.is_some() {
            self.retired = None;
            self.last = LastFrom::Current;
        }
        item
    }
}

impl<O, C> Cursor for Sequential<O, C>
where
    O: Iterator<Item = C>,
    C: Cursor,
{
    fn has_next(&mut self) -> bool {
        self.advance()
    }

    fn remove(&mut self) -> Result<()> {
        let result = match self.last {
            LastFrom::Nothing => return Err(Error::IllegalState("nothing to remove")),
            LastFrom::Current => match self.current.as_mut() {
                Some(cursor) => cursor.remove(),
                None => Err(Error::IllegalState("nothing to remove")),
            },
            LastFrom::Retired => match self.retired.take() {
                Some(mut cursor) => cursor.remove(),
                None => Err(Error::IllegalState("nothing to remove")),
            },
        };

        self.last = LastFrom::Nothing;
        result
    }
}
