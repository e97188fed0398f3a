//! Resolved class and member descriptions.
//!
//! A [`ClassView`] is what a [`crate::resolver::Resolver`] hands back for a class name. It is
//! read-only: the pipeline filters and renders it but never changes it. Every [`MemberView`]
//! shares the [`ClassInfo`] of its declaring class, so member filters that look at the
//! declaring class (e.g. [`crate::filter::MemberFilter::Visible`]) only need the member.
//!
//! The serializable [`ClassRaw`] / [`MemberRaw`] pair is the on-disk form used by class
//! catalogs; [`ClassRaw::to_owned`] turns it into a [`ClassView`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{metadata::Modifiers, Result};

/// Name of instance initializers in the class-file format
pub const CONSTRUCTOR_NAME: &str = "<init>";
/// Name of the static initializer in the class-file format
pub const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// A reference-counted pointer to a [`ClassInfo`]
pub type ClassInfoRc = Arc<ClassInfo>;

/// The kind of a class member
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A field
    Field,
    /// A method that is neither a constructor nor a static initializer
    Method,
    /// An instance initializer (`<init>`)
    Constructor,
    /// The static initializer (`<clinit>`)
    StaticInitializer,
}

impl MemberKind {
    /// `true` for methods, constructors and static initializers
    #[must_use]
    pub fn is_executable(self) -> bool {
        !matches!(self, MemberKind::Field)
    }
}

/// Class level information shared by the class and all of its members
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    /// Fully qualified, dot separated class name (e.g. `java.util.Map$Entry`)
    pub name: String,
    /// Class modifiers
    pub modifiers: Modifiers,
}

/// One field, method, constructor, or static initializer of a class
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberView {
    /// The declaring class
    pub declaring: ClassInfoRc,
    /// What kind of member this is
    pub kind: MemberKind,
    /// Member modifiers
    pub modifiers: Modifiers,
    /// Field type or method return type
    pub ty: String,
    /// Simple member name
    pub name: String,
    /// Parameter types in declaration order, empty for fields
    pub parameters: Vec<String>,
    /// Method accepts a variable number of arguments
    pub varargs: bool,
    /// Member was generated by the compiler
    pub synthetic: bool,
    /// Method is a compiler generated bridge method
    pub bridge: bool,
}

impl MemberView {
    /// `true` if this member is a field
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    /// `true` for methods, constructors and static initializers
    #[must_use]
    pub fn is_executable(&self) -> bool {
        self.kind.is_executable()
    }
}

/// A resolved class with its members in declaration order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassView {
    /// Class name and modifiers
    pub info: ClassInfoRc,
    /// Fields in declaration order
    pub fields: Vec<MemberView>,
    /// Methods, constructors and static initializers in declaration order
    pub methods: Vec<MemberView>,
}

impl ClassView {
    /// Fully qualified class name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Class modifiers
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.info.modifiers
    }

    /// Number of fields plus methods
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.fields.len() + self.methods.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Serialized form of a class, as stored in class catalogs
pub struct ClassRaw {
    /// Fully qualified class name
    pub name: String,
    /// Class modifiers
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<MemberRaw>,
    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MemberRaw>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Serialized form of a class member
pub struct MemberRaw {
    /// Member kind; derived from the name and list when absent
    #[serde(default)]
    pub kind: Option<MemberKind>,
    /// Member modifiers
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Field type or method return type
    #[serde(rename = "type")]
    pub ty: String,
    /// Simple member name
    pub name: String,
    /// Parameter types
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Varargs method
    #[serde(default)]
    pub varargs: bool,
    /// Compiler generated
    #[serde(default)]
    pub synthetic: bool,
    /// Bridge method
    #[serde(default)]
    pub bridge: bool,
}

impl ClassRaw {
    /// Convert a `ClassRaw` into a [`ClassView`] which shares the class information with all
    /// of its members.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the class or one of its members has no name, or
    /// if a member listed under `fields` is declared as executable (or the other way around).
    pub fn to_owned(&self) -> Result<ClassView> {
        if self.name.is_empty() {
            return Err(malformed_error!("Class without a name"));
        }

        let info = Arc::new(ClassInfo {
            name: self.name.clone(),
            modifiers: self.modifiers,
        });

        let fields = self
            .fields
            .iter()
            .map(|raw| raw.to_owned(&info, false))
            .collect::<Result<Vec<_>>>()?;
        let methods = self
            .methods
            .iter()
            .map(|raw| raw.to_owned(&info, true))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassView {
            info,
            fields,
            methods,
        })
    }
}

impl MemberRaw {
    fn to_owned(&self, declaring: &ClassInfoRc, in_methods: bool) -> Result<MemberView> {
        if self.name.is_empty() {
            return Err(malformed_error!("Member without a name in {}", declaring.name));
        }

        let kind = match self.kind {
            Some(kind) => kind,
            None if !in_methods => MemberKind::Field,
            None if self.name == CONSTRUCTOR_NAME => MemberKind::Constructor,
            None if self.name == STATIC_INITIALIZER_NAME => MemberKind::StaticInitializer,
            None => MemberKind::Method,
        };

        if kind.is_executable() != in_methods {
            return Err(malformed_error!(
                "{} '{}' listed with the wrong member group in {}",
                kind,
                self.name,
                declaring.name
            ));
        }

        Ok(MemberView {
            declaring: declaring.clone(),
            kind,
            modifiers: self.modifiers,
            ty: self.ty.clone(),
            name: self.name.clone(),
            parameters: self.parameters.clone(),
            varargs: self.varargs,
            synthetic: self.synthetic,
            bridge: self.bridge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn member(name: &str, ty: &str) -> MemberRaw {
        MemberRaw {
            kind: None,
            modifiers: Modifiers::PUBLIC,
            ty: ty.to_string(),
            name: name.to_string(),
            parameters: Vec::new(),
            varargs: false,
            synthetic: false,
            bridge: false,
        }
    }

    #[test]
    fn kinds_are_derived_from_names() {
        let raw = ClassRaw {
            name: "pkg.A".to_string(),
            modifiers: Modifiers::PUBLIC,
            fields: vec![member("count", "int")],
            methods: vec![
                member("<init>", "void"),
                member("<clinit>", "void"),
                member("run", "void"),
            ],
        };

        let view = raw.to_owned().unwrap();
        assert_eq!(view.name(), "pkg.A");
        assert_eq!(view.member_count(), 4);
        assert_eq!(view.fields[0].kind, MemberKind::Field);
        assert_eq!(view.methods[0].kind, MemberKind::Constructor);
        assert_eq!(view.methods[1].kind, MemberKind::StaticInitializer);
        assert_eq!(view.methods[2].kind, MemberKind::Method);
        assert!(Arc::ptr_eq(&view.info, &view.methods[2].declaring));
    }

    #[test]
    fn wrong_group_is_malformed() {
        let mut field = member("run", "void");
        field.kind = Some(MemberKind::Method);
        let raw = ClassRaw {
            name: "pkg.A".to_string(),
            modifiers: Modifiers::PUBLIC,
            fields: vec![field],
            methods: Vec::new(),
        };

        assert!(matches!(raw.to_owned(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn catalog_json() {
        let json = r#"{
            "name": "pkg.C",
            "modifiers": "PUBLIC",
            "fields": [{ "modifiers": "PUBLIC | STATIC | FINAL", "type": "int", "name": "X" }],
            "methods": [{ "type": "void", "name": "m", "parameters": ["int", "java.lang.String[]"], "varargs": true }]
        }"#;

        let raw: ClassRaw = serde_json::from_str(json).unwrap();
        let view = raw.to_owned().unwrap();
        assert_eq!(
            view.fields[0].modifiers,
            Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL
        );
        assert_eq!(view.methods[0].parameters, vec!["int", "java.lang.String[]"]);
        assert!(view.methods[0].varargs);
        assert!(!view.methods[0].bridge);
    }

    #[test]
    fn kind_names() {
        assert_eq!(MemberKind::StaticInitializer.to_string(), "static_initializer");
        assert_eq!("field".parse::<MemberKind>().unwrap(), MemberKind::Field);
    }
}
