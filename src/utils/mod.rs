//! Lazy cursor composition used by the name sources and the format engine.
//!
//! - [`Cursor`]: an iterator with a non-consuming [`Cursor::has_next`] and optional removal
//! - [`IterCursor`], [`VecCursor`]: leaf cursors
//! - [`Sequential`]: exhausts sub-cursors one after another
//! - [`Filtered`]: keeps only elements accepted by a [`crate::filter::Filter`]
//!
//! Every element of a finite composition is visited exactly once and in source order.

mod cursor;
mod filtered;
mod sequential;

pub use cursor::{Cursor, IterCursor, VecCursor};
pub use filtered::Filtered;
pub use sequential::Sequential;
