// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # jlscope
//!
//! List the members of Java classes in formats that downstream tooling consumes: PScout
//! signature lines, CSV signature tables, detailed CSV with modifiers, or plain class file
//! listings.
//!
//! `jlscope` is built as a small pipeline:
//!
//! ```text
//! NameSource -> Analyzer -> Session (Resolver) -> ClassFormatter -> Printer
//! ```
//!
//! - a [`source::NameSource`] yields class names (a literal list, a file, or every class in
//!   the archives of a class path)
//! - the [`Analyzer`] resolves each name through a [`resolver::Session`] and skips classes
//!   that cannot be resolved
//! - a [`format::ClassFormatter`] renders the members accepted by a [`filter::Filter`]
//! - a [`print::Printer`] receives the text
//!
//! ## Quick Start
//!
//! ```rust
//! use jlscope::prelude::*;
//!
//! let mut resolver = CatalogResolver::new();
//! resolver.load(r#"[{
//!     "name": "pkg.A",
//!     "modifiers": "PUBLIC",
//!     "methods": [{ "modifiers": "PUBLIC", "type": "int", "name": "get" }]
//! }]"#.as_bytes())?;
//!
//! let mut analyzer = Analyzer::new(Session::new(resolver));
//! let source = ClassNames::new(["pkg.A"]);
//! let formatter = PscoutFormatter::new(Some(MemberFilter::Visible.rc()));
//!
//! assert_eq!(file_name(&source, &formatter), "LIST_VISIBLE.pscout");
//! let summary = analyzer.print(&source, &formatter, &mut StdOutPrinter::new())?;
//! assert_eq!(summary.written, 1);
//! analyzer.close();
//! # Ok::<(), jlscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`filter`] - Named, composable predicates over class names and members
//! - [`utils`] - Lazy cursors: sequential and filtered composition
//! - [`metadata`] - Resolved class views and modifier flags
//! - [`file`] - Class archives on disk or in memory
//! - [`source`] - Class name sources
//! - [`resolver`] - Class resolution and the class catalog resolver
//! - [`format`] - The format engine and its renderers
//! - [`print`] - Output sinks
//! - [`Error`] and [`Result`] - Error handling

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

mod analyzer;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use jlscope::prelude::*;
///
/// let visible = MemberFilter::Visible.rc();
/// let formatter = CsvDetailFormatter::new(Some(visible));
/// assert_eq!(formatter.filename_suffix(), "VISIBLE_detail");
/// ```
pub mod prelude;

/// Class archives (`.jar`, `.zip`) and the byte backends they are read from
pub mod file;

/// Named, composable predicates
///
/// See [`filter::Filter`], [`filter::and`] and [`filter::or`].
pub mod filter;

/// Resolved class metadata: [`metadata::ClassView`], [`metadata::MemberView`] and
/// [`metadata::Modifiers`]
pub mod metadata;

/// Class name sources
pub mod source;

/// Class name to class metadata resolution
pub mod resolver;

/// The format engine and the renderers
pub mod format;

/// Output sinks
pub mod print;

/// Lazy cursor composition
pub mod utils;

/// `jlscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `jlscope` Error type
///
/// See [`Error::is_recoverable`] for how the pipeline treats the individual variants.
pub use error::Error;

pub use analyzer::{file_name, Analyzer, Summary};
