use std::{
    collections::HashMap,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    metadata::{ClassRaw, ClassView},
    resolver::Resolver,
    Error, Result,
};

/// Resolver backed by class catalogs.
///
/// A catalog is a JSON array of classes in the [`ClassRaw`] layout:
///
/// ```json
/// [
///   {
///     "name": "pkg.A",
///     "modifiers": "PUBLIC",
///     "fields": [{ "modifiers": "PUBLIC", "type": "int", "name": "count" }],
///     "methods": [{ "modifiers": "PUBLIC", "type": "int", "name": "get" }]
///   }
/// ]
/// ```
///
/// Entries are converted on lookup, so a damaged entry only fails its own class. If several
/// catalogs describe the same class, the one loaded last wins.
#[derive(Debug, Default)]
pub struct CatalogResolver {
    classes: HashMap<String, ClassRaw>,
}

impl CatalogResolver {
    /// An empty catalog
    #[must_use]
    pub fn new() -> Self {
        CatalogResolver::default()
    }

    /// Load a single catalog file.
    ///
    /// # Errors
    /// Returns [`Error::SourceIo`] if the file cannot be read and [`Error::Catalog`] if it is
    /// not a valid catalog.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut resolver = CatalogResolver::new();
        resolver.load_file(path.as_ref())?;
        Ok(resolver)
    }

    /// Load every catalog in `paths`, in order
    ///
    /// # Errors
    /// See [`CatalogResolver::from_file`].
    pub fn from_files(paths: &[PathBuf]) -> Result<Self> {
        let mut resolver = CatalogResolver::new();
        for path in paths {
            resolver.load_file(path)?;
        }
        Ok(resolver)
    }

    /// Add the classes of the catalog at `path`
    ///
    /// # Errors
    /// See [`CatalogResolver::from_file`].
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let data = fs::read(path).map_err(|source| Error::SourceIo {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.load(data.as_slice())?;
        log::debug!("Loaded {} classes from catalog {}", count, path.display());
        Ok(count)
    }

    /// Add the classes of a catalog read from `reader`, returning how many were read
    ///
    /// # Errors
    /// Returns [`Error::Catalog`] if the data is not a valid catalog.
    pub fn load(&mut self, reader: impl Read) -> Result<usize> {
        let classes: Vec<ClassRaw> = serde_json::from_reader(reader)?;
        let count = classes.len();
        for class in classes {
            self.classes.insert(class.name.clone(), class);
        }
        Ok(count)
    }

    /// Add a single class
    pub fn insert(&mut self, class: ClassRaw) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Number of known classes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// `true` if no class is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Resolver for CatalogResolver {
    fn resolve(&mut self, name: &str) -> Result<ClassView> {
        match self.classes.get(name) {
            Some(raw) => raw.to_owned(),
            None => Err(Error::ClassNotFound(name.to_string())),
        }
    }
}
