//! # jlscope Prelude
//!
//! The types needed to assemble and run a listing pipeline, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all jlscope operations
pub use crate::Error;

/// The result type used throughout jlscope
pub use crate::Result;

// ================================================================================================
// Pipeline
// ================================================================================================

/// The pipeline driver and its run counters
pub use crate::{file_name, Analyzer, Summary};

/// Class name sources
pub use crate::source::{ClassNames, ClassPath, NameFile, NameSource};

/// Class resolution
pub use crate::resolver::{CatalogResolver, Resolver, Session};

/// Renderers
pub use crate::format::{
    ClassFormatter, ClassOnlyFormatter, CsvDetailFormatter, CsvFormatter, OutputType,
    PscoutFormatter,
};

/// Output sinks
pub use crate::print::{FilePrinter, Printer, StdOutPrinter};

// ================================================================================================
// Filters and Metadata
// ================================================================================================

/// Predicates and their combinators
pub use crate::filter::{and, or, BasicFilter, Filter, FilterRc, MemberFilter, NameFilter};

/// Class metadata
pub use crate::metadata::{ClassView, MemberKind, MemberView, Modifiers};
