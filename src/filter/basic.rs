use std::sync::Arc;

use strum::{Display, IntoStaticStr};

use crate::filter::{Filter, FilterRc};

/// Filters that ignore the item entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BasicFilter {
    /// Accepts everything.
    All,
    /// Accepts nothing.
    None,
}

impl BasicFilter {
    /// A new shared [`BasicFilter::All`] for items of type `T`
    #[must_use]
    pub fn all<T: ?Sized + 'static>() -> FilterRc<T> {
        Arc::new(BasicFilter::All)
    }

    /// A new shared [`BasicFilter::None`] for items of type `T`
    #[must_use]
    pub fn none<T: ?Sized + 'static>() -> FilterRc<T> {
        Arc::new(BasicFilter::None)
    }
}

impl<T: ?Sized> Filter<T> for BasicFilter {
    fn accept(&self, _item: &T) -> bool {
        matches!(self, BasicFilter::All)
    }

    fn name(&self) -> String {
        self.to_string()
    }
}
