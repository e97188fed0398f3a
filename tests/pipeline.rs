//! End to end runs of the listing pipeline through the public API.

use std::{
    fs,
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use jlscope::{
    filter::{MemberFilter, NameFilter},
    format::{CsvDetailFormatter, CsvFormatter, OutputType, PscoutFormatter, LINE_END},
    metadata::{ClassView, Modifiers},
    prelude::*,
};
use zip::{write::SimpleFileOptions, ZipWriter};

const CATALOG: &str = r#"[
    {
        "name": "pkg.A",
        "modifiers": "PUBLIC",
        "fields": [{ "modifiers": "PUBLIC", "type": "int", "name": "count" }],
        "methods": [
            { "modifiers": "PUBLIC", "type": "int", "name": "get" },
            { "modifiers": "PUBLIC", "type": "void", "name": "put", "parameters": ["java.lang.String", "int[]"] }
        ]
    },
    {
        "name": "C",
        "modifiers": "PUBLIC",
        "fields": [{ "modifiers": "PUBLIC | STATIC | FINAL", "type": "int", "name": "X" }]
    },
    {
        "name": "java.lang.Object",
        "modifiers": "PUBLIC",
        "methods": [
            { "modifiers": "PUBLIC", "type": "void", "name": "<init>" },
            { "modifiers": "PUBLIC | FINAL | NATIVE", "type": "java.lang.Class", "name": "getClass" },
            { "modifiers": "PRIVATE | STATIC | NATIVE", "type": "void", "name": "registerNatives" }
        ]
    }
]"#;

fn analyzer() -> Analyzer {
    let mut resolver = CatalogResolver::new();
    resolver.load(CATALOG.as_bytes()).unwrap();
    Analyzer::new(Session::new(resolver))
}

fn jar(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in entries {
        writer
            .start_file(*entry, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"\xCA\xFE\xBA\xBE").unwrap();
    }

    let path = dir.join(name);
    fs::write(&path, writer.finish().unwrap().into_inner()).unwrap();
    path
}

/// Collects everything in memory
#[derive(Default)]
struct Buffer {
    text: String,
    open: bool,
    closes: usize,
}

impl Printer for Buffer {
    fn open(&mut self) -> Result<()> {
        self.open = true;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        if !self.open {
            return Err(Error::SinkState("closed"));
        }
        self.text.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            self.closes += 1;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

fn lines(text: &str) -> Vec<&str> {
    text.split_terminator(LINE_END).collect()
}

#[test]
fn resolved_and_unresolved_classes() {
    let source = ClassNames::new(["pkg.A", "pkg.B"]);
    let formatter = CsvFormatter::new(Some(MemberFilter::Visible.rc()));
    let mut buffer = Buffer::default();

    let summary = analyzer().print(&source, &formatter, &mut buffer).unwrap();

    assert_eq!(
        lines(&buffer.text),
        vec![
            "class,method/field sig",
            "\"pkg.A\",\"int count\"",
            "\"pkg.A\",\"int get()\"",
            "\"pkg.A\",\"void put(java.lang.String,int[])\"",
        ]
    );
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.written, 1);
    assert_eq!(buffer.closes, 1);
    assert!(!buffer.is_open());
}

#[test]
fn detail_row_for_constant() {
    let source = ClassNames::new(["C"]);
    let formatter = CsvDetailFormatter::new(Some(MemberFilter::Visible.rc()));
    let mut buffer = Buffer::default();

    analyzer().print(&source, &formatter, &mut buffer).unwrap();

    assert_eq!(
        lines(&buffer.text),
        vec![
            ",CLASS,CLASS,CLASS,M/F,M/F,M/F Type,M/F Name,varg,syn,bridge,params",
            "F,\"public\",\"\",\"C\",\"public\",\"static final\",\"int\",\"X\"",
        ]
    );
}

#[test]
fn pscout_skips_fields_and_field_only_classes() {
    let source = ClassNames::new(["C", "pkg.A"]);
    let formatter = PscoutFormatter::new(Some(MemberFilter::All.rc()));
    let mut buffer = Buffer::default();

    let summary = analyzer().print(&source, &formatter, &mut buffer).unwrap();

    assert_eq!(
        lines(&buffer.text),
        vec!["<pkg.A: int get()> ", "<pkg.A: void put(java.lang.String,int[])> "]
    );
    assert_eq!(summary.empty, 1);
    assert_eq!(summary.written, 1);
}

#[test]
fn classpath_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let rt = jar(
        dir.path(),
        "rt.jar",
        &["java/lang/Object.class", "sun/misc/Unsafe.class"],
    );
    let app = jar(dir.path(), "app.jar", &["pkg/A.class", "pkg/A$Inner.class"]);
    let classpath = ClassPath::new([rt, app], NameFilter::Jdk.rc());

    let mut analyzer = analyzer();
    let formatter = PscoutFormatter::new(Some(MemberFilter::Native.rc()));
    let (path, summary) = analyzer
        .print_to_file(&classpath, &formatter, dir.path())
        .unwrap();

    assert_eq!(path, dir.path().join("CP-JDK_NATIVE.pscout"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!(
            "<java.lang.Object: java.lang.Class getClass()> {LINE_END}<java.lang.Object: void registerNatives()> {LINE_END}"
        )
    );
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn name_file_with_class_only_output() {
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, "java.lang.Object\npkg.A\nC\n").unwrap();

    let source = NameFile::new(&names);
    let mut buffer = Buffer::default();
    analyzer()
        .print_output(
            &source,
            OutputType::ClassOnly,
            Some(MemberFilter::Executable.rc()),
            &mut buffer,
        )
        .unwrap();

    assert_eq!(buffer.text, "java/lang/Object.class\npkg/A.class\n");
}

#[test]
fn custom_resolver() {
    struct Synthesized;

    impl Resolver for Synthesized {
        fn resolve(&mut self, name: &str) -> Result<ClassView> {
            let raw = jlscope::metadata::ClassRaw {
                name: name.to_string(),
                modifiers: Modifiers::PUBLIC,
                fields: Vec::new(),
                methods: vec![jlscope::metadata::MemberRaw {
                    kind: None,
                    modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
                    ty: "void".to_string(),
                    name: "main".to_string(),
                    parameters: vec!["java.lang.String[]".to_string()],
                    varargs: false,
                    synthetic: false,
                    bridge: false,
                }],
            };
            raw.to_owned()
        }
    }

    let mut analyzer = Analyzer::new(Session::new(Synthesized));
    let mut buffer = Buffer::default();
    analyzer
        .print(
            &ClassNames::new(["app.Main"]),
            &PscoutFormatter::new(None),
            &mut buffer,
        )
        .unwrap();

    assert_eq!(
        lines(&buffer.text),
        vec!["<app.Main: void main(java.lang.String[])> "]
    );
    assert_eq!(analyzer.session().resolved(), 1);
}
