use std::sync::Arc;

use strum::{Display, IntoStaticStr};

use crate::filter::{Filter, FilterRc};

/// A reference-counted filter over class names
pub type NameFilterRc = FilterRc<str>;

/// Package prefixes of the classes shipped with the Java platform.
pub const JDK_PREFIXES: &[&str] = &[
    "java.",
    "javax.",
    "org.ietf.jgss.",
    "org.omg.",
    "org.w3c.dom.",
    "org.xml.sax.",
];

/// Predefined class name filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NameFilter {
    /// Accepts classes in one of the [`JDK_PREFIXES`] packages.
    Jdk,
}

impl NameFilter {
    /// Wrap this filter into a shared [`NameFilterRc`]
    #[must_use]
    pub fn rc(self) -> NameFilterRc {
        Arc::new(self)
    }
}

impl Filter<str> for NameFilter {
    fn accept(&self, class_name: &str) -> bool {
        match self {
            NameFilter::Jdk => JDK_PREFIXES
                .iter()
                .any(|prefix| class_name.starts_with(prefix)),
        }
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

/// Accepts class names starting with any of a set of prefixes.
#[derive(Clone, Debug)]
pub struct PrefixFilter {
    name: String,
    prefixes: Vec<String>,
}

impl PrefixFilter {
    /// Create a prefix filter called `name`.
    ///
    /// ## Arguments
    /// * `name` - Filter name, used in output file names
    /// * `prefixes` - Accepted name prefixes, e.g. `"com.example."`
    pub fn new<I, S>(name: impl Into<String>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PrefixFilter {
            name: name.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter<str> for PrefixFilter {
    fn accept(&self, class_name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| class_name.starts_with(prefix.as_str()))
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
