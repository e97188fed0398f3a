use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    file::Archive,
    filter::{Filter, NameFilterRc},
    source::{read_lines, NameIter, NameSource},
    utils::{Sequential, VecCursor},
    Result,
};

/// Environment variable that overrides the detected boot class path
pub const BOOT_CLASSPATH_VAR: &str = "JLSCOPE_BOOT_CLASSPATH";

/// All classes found in the archives of a class path.
///
/// Archives are scanned lazily, one at a time, while the names are consumed. Only `.class`
/// entries are reported, converted to dotted names and passed through the name filter.
///
/// Entries are handled as follows:
/// - a missing path is skipped
/// - a directory is skipped with a warning; directory class paths are not traversed
/// - an archive that cannot be opened or read is skipped with a warning
#[derive(Clone)]
pub struct ClassPath {
    paths: Vec<PathBuf>,
    filter: NameFilterRc,
}

impl ClassPath {
    /// A class path made of the given entries
    pub fn new<I, P>(paths: I, filter: NameFilterRc) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        ClassPath {
            paths: paths.into_iter().map(Into::into).collect(),
            filter,
        }
    }

    /// The boot class path of the installed Java platform.
    ///
    /// Taken from [`BOOT_CLASSPATH_VAR`] if set, otherwise every `*.jar` in
    /// `$JAVA_HOME/jre/lib` followed by `$JAVA_HOME/lib`.
    pub fn boot(filter: NameFilterRc) -> Self {
        let paths = boot_paths(
            env::var_os(BOOT_CLASSPATH_VAR),
            env::var_os("JAVA_HOME").map(PathBuf::from),
        );
        if paths.is_empty() {
            log::warn!(
                "No boot class path found, set {} or JAVA_HOME",
                BOOT_CLASSPATH_VAR
            );
        }

        ClassPath::new(paths, filter)
    }

    /// The class path in the `CLASSPATH` environment variable
    pub fn java(filter: NameFilterRc) -> Self {
        let paths: Vec<PathBuf> = env::var_os("CLASSPATH")
            .map(|value| env::split_paths(&value).collect())
            .unwrap_or_default();

        ClassPath::new(paths, filter)
    }

    /// A class path read from a file with one path per line.
    ///
    /// # Errors
    /// Returns [`crate::Error::SourceIo`] if the file cannot be read.
    pub fn from_path_file(file: impl AsRef<Path>, filter: NameFilterRc) -> Result<Self> {
        let paths = read_lines(file.as_ref())?;
        Ok(ClassPath::new(
            paths.into_iter().filter(|line| !line.is_empty()),
            filter,
        ))
    }

    /// The class path entries, in scan order
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// The filter applied to every class name
    #[must_use]
    pub fn filter(&self) -> &NameFilterRc {
        &self.filter
    }
}

impl NameSource for ClassPath {
    fn names(&self) -> Result<NameIter<'_>> {
        let filter = self.filter.as_ref();
        let cursors = self
            .paths
            .iter()
            .map(move |path| VecCursor::new(scan(path, filter)));

        Ok(Box::new(Sequential::new(cursors)))
    }

    fn name(&self) -> String {
        format!("CP-{}", self.filter.name())
    }
}

/// Class names of a single class path entry, empty if the entry is unusable
fn scan(path: &Path, filter: &dyn Filter<str>) -> Vec<String> {
    if !path.exists() {
        log::debug!("Skipping missing class path entry {}", path.display());
        return Vec::new();
    }

    if path.is_dir() {
        log::warn!(
            "Skipping directory {}, directories on the class path are not traversed",
            path.display()
        );
        return Vec::new();
    }

    match Archive::from_file(path).and_then(|archive| archive.class_names(filter)) {
        Ok(names) => {
            log::debug!("Found {} classes in {}", names.len(), path.display());
            names
        }
        Err(error) => {
            log::warn!("Skipping {}", error);
            Vec::new()
        }
    }
}

fn boot_paths(boot: Option<OsString>, java_home: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(boot) = boot {
        return env::split_paths(&boot)
            .filter(|path| !path.as_os_str().is_empty())
            .collect();
    }

    let Some(home) = java_home else {
        return Vec::new();
    };

    let mut paths = jars_in(&home.join("jre").join("lib"));
    paths.extend(jars_in(&home.join("lib")));
    paths
}

/// All `*.jar` files directly inside `dir`, sorted by name
fn jars_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut jars: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "jar"))
        .collect();
    jars.sort();
    jars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter::{BasicFilter, NameFilter},
        test::jar_bytes,
    };

    fn write_jar(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, jar_bytes(entries)).unwrap();
        path
    }

    #[test]
    fn scans_paths_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let one = write_jar(dir.path(), "one.jar", &["a/A.class", "java/lang/Object.class"]);
        let two = write_jar(dir.path(), "two.jar", &["b/B.class", "META-INF/MANIFEST.MF"]);

        let classpath = ClassPath::new([&one, &two], BasicFilter::all::<str>());
        let names: Vec<String> = classpath.names().unwrap().collect();
        assert_eq!(names, vec!["a.A", "java.lang.Object", "b.B"]);
        assert_eq!(classpath.name(), "CP-ALL");

        let jdk = ClassPath::new([&one, &two], NameFilter::Jdk.rc());
        assert_eq!(jdk.names().unwrap().collect::<Vec<_>>(), vec!["java.lang.Object"]);
        assert_eq!(jdk.name(), "CP-JDK");
    }

    #[test]
    fn skips_unusable_entries() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_jar(dir.path(), "good.jar", &["a/A.class"]);
        let broken = dir.path().join("broken.jar");
        fs::write(&broken, b"definitely not a zip").unwrap();
        let missing = dir.path().join("missing.jar");
        let subdir = dir.path().join("classes");
        fs::create_dir(&subdir).unwrap();

        let classpath = ClassPath::new(
            [broken, missing, subdir, good],
            BasicFilter::all::<str>(),
        );
        let names: Vec<String> = classpath.names().unwrap().collect();
        assert_eq!(names, vec!["a.A"]);
    }

    #[test]
    fn path_file() {
        let dir = tempfile::tempdir().unwrap();
        let jar = write_jar(dir.path(), "lib.jar", &["x/Y.class"]);
        let list = dir.path().join("paths.txt");
        fs::write(&list, format!("{}\n\n", jar.display())).unwrap();

        let classpath = ClassPath::from_path_file(&list, BasicFilter::all::<str>()).unwrap();
        assert_eq!(classpath.paths(), &[jar]);
        assert_eq!(classpath.names().unwrap().collect::<Vec<_>>(), vec!["x.Y"]);

        assert!(matches!(
            ClassPath::from_path_file(dir.path().join("nope.txt"), BasicFilter::all::<str>()),
            Err(crate::Error::SourceIo { .. })
        ));
    }

    #[test]
    fn boot_from_override() {
        let joined = env::join_paths(["/opt/a.jar", "/opt/b.jar"]).unwrap();
        let paths = boot_paths(Some(joined), Some(PathBuf::from("/ignored")));
        assert_eq!(
            paths,
            vec![PathBuf::from("/opt/a.jar"), PathBuf::from("/opt/b.jar")]
        );
    }

    #[test]
    fn boot_from_java_home() {
        let home = tempfile::tempdir().unwrap();
        let jre_lib = home.path().join("jre").join("lib");
        let lib = home.path().join("lib");
        fs::create_dir_all(&jre_lib).unwrap();
        fs::create_dir_all(&lib).unwrap();
        fs::write(jre_lib.join("rt.jar"), b"").unwrap();
        fs::write(jre_lib.join("jce.jar"), b"").unwrap();
        fs::write(jre_lib.join("notes.txt"), b"").unwrap();
        fs::write(lib.join("tools.jar"), b"").unwrap();

        let paths = boot_paths(None, Some(home.path().to_path_buf()));
        assert_eq!(
            paths,
            vec![jre_lib.join("jce.jar"), jre_lib.join("rt.jar"), lib.join("tools.jar")]
        );

        assert!(boot_paths(None, None).is_empty());
    }

    #[test]
    fn java_from_environment() {
        let dir = tempfile::tempdir().unwrap();
        let one = write_jar(dir.path(), "one.jar", &["a/A.class"]);
        let two = write_jar(dir.path(), "two.jar", &["java/util/List.class"]);

        // no other test reads CLASSPATH
        env::set_var("CLASSPATH", env::join_paths([&one, &two]).unwrap());
        let classpath = ClassPath::java(NameFilter::Jdk.rc());
        env::remove_var("CLASSPATH");

        assert_eq!(classpath.paths(), &[one, two]);
        assert_eq!(classpath.name(), "CP-JDK");
        assert_eq!(classpath.names().unwrap().collect::<Vec<_>>(), vec!["java.util.List"]);
    }
}
