//! Class name to [`ClassView`] resolution.
//!
//! The pipeline does not read class files itself. It asks a [`Resolver`] for the structured
//! view of a class and treats every failure as "skip this class". A resolver is wrapped in a
//! [`Session`] that is created once per run, configured with the class path, handed to the
//! [`crate::Analyzer`] and closed at the end.
//!
//! [`CatalogResolver`] serves classes from JSON catalogs prepared ahead of time.

mod catalog;

use std::path::PathBuf;

use crate::{metadata::ClassView, Result};

pub use catalog::CatalogResolver;

/// Provider of class metadata.
pub trait Resolver {
    /// Look up the class called `name` (dotted, fully qualified).
    ///
    /// # Errors
    /// Returns [`crate::Error::ClassNotFound`] for unknown classes, or any other recoverable
    /// error (see [`crate::Error::is_recoverable`]) if the class cannot be described.
    fn resolve(&mut self, name: &str) -> Result<ClassView>;

    /// Configure the class path used for subsequent lookups.
    fn set_classpath(&mut self, _paths: &[PathBuf]) {}
}

/// One resolution session: a resolver plus counters for the end of run report.
pub struct Session {
    resolver: Box<dyn Resolver>,
    resolved: usize,
    failed: usize,
}

impl Session {
    /// Start a session on `resolver`
    pub fn new(resolver: impl Resolver + 'static) -> Self {
        Session {
            resolver: Box::new(resolver),
            resolved: 0,
            failed: 0,
        }
    }

    /// Forward the class path to the resolver
    pub fn set_classpath(&mut self, paths: &[PathBuf]) {
        log::debug!("Resolver class path: {} entries", paths.len());
        self.resolver.set_classpath(paths);
    }

    /// Resolve `name`, counting the outcome.
    ///
    /// # Errors
    /// Whatever the resolver returns.
    pub fn resolve(&mut self, name: &str) -> Result<ClassView> {
        let result = self.resolver.resolve(name);
        match result {
            Ok(_) => self.resolved += 1,
            Err(_) => self.failed += 1,
        }
        result
    }

    /// Number of successful lookups so far
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    /// Number of failed lookups so far
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// End the session
    pub fn close(self) {
        log::info!(
            "Resolver session closed: {} resolved, {} failed",
            self.resolved,
            self.failed
        );
    }
}
