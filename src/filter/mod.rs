//! Named, composable predicates over class names and class members.
//!
//! Everything that decides "does this item qualify" goes through the single [`Filter`]
//! capability: [`Filter::accept`] and [`Filter::name`]. The name is not cosmetic, it ends up
//! in output file names, so it must be short, deterministic, and safe for use in a path.
//!
//! Filters are shared as [`FilterRc`] and combined with [`and`] / [`or`]. Combining a filter
//! with itself hands back the very same instance; any other pair produces a new filter named
//! `"<left>-AND-<right>"` (or `-OR-`) that evaluates the left operand first and
//! short-circuits.
//!
//! # Predefined filters
//! - [`BasicFilter`]: accept everything / nothing, for any item type
//! - [`NameFilter`], [`PrefixFilter`]: class name filters
//! - [`MemberFilter`]: member kind, modifier, and visibility filters
//!
//! # Examples
//!
//! ```rust
//! use jlscope::filter::{and, Filter, MemberFilter};
//!
//! let visible = MemberFilter::Visible.rc();
//! let executable = MemberFilter::Executable.rc();
//!
//! let both = and(visible.clone(), executable);
//! assert_eq!(both.name(), "VISIBLE-AND-EXECUTABLE");
//!
//! let same = and(visible.clone(), visible.clone());
//! assert!(std::sync::Arc::ptr_eq(&same, &visible));
//! ```

mod basic;
mod member;
mod name;

use std::sync::Arc;

pub use basic::BasicFilter;
pub use member::{MemberFilter, MemberFilterRc};
pub use name::{NameFilter, NameFilterRc, PrefixFilter};

/// A named boolean test over items of type `T`.
pub trait Filter<T: ?Sized>: Send + Sync {
    /// Returns `true` iff `item` should be accepted by this filter.
    fn accept(&self, item: &T) -> bool;

    /// A short name for this filter that is safe for inclusion in a file name.
    fn name(&self) -> String;
}

/// A reference-counted pointer to a [`Filter`]
pub type FilterRc<T> = Arc<dyn Filter<T>>;

struct And<T: ?Sized> {
    one: FilterRc<T>,
    two: FilterRc<T>,
}

impl<T: ?Sized> Filter<T> for And<T> {
    fn accept(&self, item: &T) -> bool {
        self.one.accept(item) && self.two.accept(item)
    }

    fn name(&self) -> String {
        format!("{}-AND-{}", self.one.name(), self.two.name())
    }
}

struct Or<T: ?Sized> {
    one: FilterRc<T>,
    two: FilterRc<T>,
}

impl<T: ?Sized> Filter<T> for Or<T> {
    fn accept(&self, item: &T) -> bool {
        self.one.accept(item) || self.two.accept(item)
    }

    fn name(&self) -> String {
        format!("{}-OR-{}", self.one.name(), self.two.name())
    }
}

/// Conjunction of two filters.
///
/// Returns `one` unchanged if both arguments are the same instance.
pub fn and<T: ?Sized + 'static>(one: FilterRc<T>, two: FilterRc<T>) -> FilterRc<T> {
    if Arc::ptr_eq(&one, &two) {
        one
    } else {
        Arc::new(And { one, two })
    }
}

/// Disjunction of two filters.
///
/// Returns `one` unchanged if both arguments are the same instance.
pub fn or<T: ?Sized + 'static>(one: FilterRc<T>, two: FilterRc<T>) -> FilterRc<T> {
    if Arc::ptr_eq(&one, &two) {
        one
    } else {
        Arc::new(Or { one, two })
    }
}
