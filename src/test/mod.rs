use std::io::{Cursor, Write};

use zip::{write::SimpleFileOptions, ZipWriter};

use crate::{
    metadata::{
        ClassRaw, ClassView, MemberKind, MemberRaw, Modifiers, CONSTRUCTOR_NAME,
        STATIC_INITIALIZER_NAME,
    },
    print::Printer,
    Error, Result,
};

// Helper function to create a field
pub fn field(name: &str, ty: &str, modifiers: Modifiers) -> MemberRaw {
    MemberRaw {
        kind: Some(MemberKind::Field),
        modifiers,
        ty: ty.to_string(),
        name: name.to_string(),
        parameters: Vec::new(),
        varargs: false,
        synthetic: false,
        bridge: false,
    }
}

// Helper function to create a plain method
pub fn method(name: &str, ret: &str, modifiers: Modifiers, params: &[&str]) -> MemberRaw {
    MemberRaw {
        kind: Some(MemberKind::Method),
        modifiers,
        ty: ret.to_string(),
        name: name.to_string(),
        parameters: params.iter().map(|p| p.to_string()).collect(),
        varargs: false,
        synthetic: false,
        bridge: false,
    }
}

// Helper function to create a constructor
pub fn constructor(modifiers: Modifiers, params: &[&str]) -> MemberRaw {
    MemberRaw {
        kind: Some(MemberKind::Constructor),
        ..method(CONSTRUCTOR_NAME, "void", modifiers, params)
    }
}

// Helper function to create a static initializer
pub fn static_initializer() -> MemberRaw {
    MemberRaw {
        kind: Some(MemberKind::StaticInitializer),
        ..method(STATIC_INITIALIZER_NAME, "void", Modifiers::STATIC, &[])
    }
}

// Helper function to create a class from its members
pub fn class_with(
    name: &str,
    modifiers: Modifiers,
    fields: Vec<MemberRaw>,
    methods: Vec<MemberRaw>,
) -> ClassView {
    ClassRaw {
        name: name.to_string(),
        modifiers,
        fields,
        methods,
    }
    .to_owned()
    .unwrap()
}

/// `public class pkg.A` with one public field and two public methods
pub fn class_a() -> ClassView {
    class_with(
        "pkg.A",
        Modifiers::PUBLIC,
        vec![field("count", "int", Modifiers::PUBLIC)],
        vec![
            method("get", "int", Modifiers::PUBLIC, &[]),
            method(
                "put",
                "void",
                Modifiers::PUBLIC,
                &["java.lang.String", "int[]"],
            ),
        ],
    )
}

// Helper function to build a zip archive in memory; names ending in '/' become directories
pub fn jar_bytes(entries: &[&str]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for entry in entries {
        if entry.ends_with('/') {
            writer.add_directory(*entry, options).unwrap();
        } else {
            writer.start_file(*entry, options).unwrap();
            writer.write_all(b"\xCA\xFE\xBA\xBE").unwrap();
        }
    }

    writer.finish().unwrap().into_inner()
}

/// A printer that keeps everything in memory and counts lifecycle calls
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    pub output: String,
    pub opened: usize,
    pub closed: usize,
    pub prints: usize,
    open: bool,
}

impl Printer for RecordingPrinter {
    fn open(&mut self) -> Result<()> {
        if !self.open {
            self.open = true;
            self.opened += 1;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        if !self.open {
            return Err(Error::SinkState("printer is not open"));
        }
        self.prints += 1;
        self.output.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            self.closed += 1;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
