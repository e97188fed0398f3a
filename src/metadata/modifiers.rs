//! Java access and property flags for classes and class members.
//!
//! [`Modifiers`] uses the bit values of the class-file `access_flags` items (JVMS §4.1, §4.5,
//! §4.6) so that resolvers can hand raw flags over unchanged. Rendering follows the classic
//! textual ordering used by JVM tooling:
//!
//! `public|private|protected abstract static final synchronized native transient volatile
//! strictfp annotation enum interface`
//!
//! `synthetic` is tracked but never rendered.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Bitmask for access modifier extraction
pub const ACCESS_MODIFIERS_MASK: u32 = 0x0007;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    /// Modifiers of a class or class member
    pub struct Modifiers: u32 {
        /// Accessible from everywhere
        const PUBLIC = 0x0001;
        /// Accessible only within the declaring class
        const PRIVATE = 0x0002;
        /// Accessible within the package and from subclasses
        const PROTECTED = 0x0004;
        /// Belongs to the class rather than an instance
        const STATIC = 0x0008;
        /// Cannot be overridden, subclassed, or reassigned
        const FINAL = 0x0010;
        /// Invocation is wrapped by a monitor (shares its bit with `ACC_SUPER` on classes)
        const SYNCHRONIZED = 0x0020;
        /// Field is not cached (shares its bit with `ACC_BRIDGE` on methods)
        const VOLATILE = 0x0040;
        /// Field is not serialized (shares its bit with `ACC_VARARGS` on methods)
        const TRANSIENT = 0x0080;
        /// Implemented in a language other than Java
        const NATIVE = 0x0100;
        /// Class is an interface
        const INTERFACE = 0x0200;
        /// No implementation provided
        const ABSTRACT = 0x0400;
        /// Floating point is FP-strict
        const STRICTFP = 0x0800;
        /// Not present in source code
        const SYNTHETIC = 0x1000;
        /// Class is an annotation interface
        const ANNOTATION = 0x2000;
        /// Class or field is an enum (constant)
        const ENUM = 0x4000;
    }
}

/// Rendering order of the non-access modifiers.
const RENDER_ORDER: [(Modifiers, &str); 11] = [
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::STRICTFP, "strictfp"),
    (Modifiers::ANNOTATION, "annotation"),
    (Modifiers::ENUM, "enum"),
    (Modifiers::INTERFACE, "interface"),
];

impl Modifiers {
    /// Extract only the access modifiers (public, private, protected)
    #[must_use]
    pub fn access(self) -> Self {
        Self::from_bits_truncate(self.bits() & ACCESS_MODIFIERS_MASK)
    }

    /// Everything except the access modifiers
    #[must_use]
    pub fn non_access(self) -> Self {
        Self::from_bits_truncate(self.bits() & !ACCESS_MODIFIERS_MASK)
    }

    /// `true` if either `public` or `protected` is set
    #[must_use]
    pub fn is_public_or_protected(self) -> bool {
        self.intersects(Self::PUBLIC | Self::PROTECTED)
    }

    /// Space separated textual form, e.g. `"public static final"`.
    ///
    /// Only one access modifier is rendered even if the flags are inconsistent, with
    /// `public` taking precedence over `private` over `protected`.
    #[must_use]
    pub fn render(self) -> String {
        let mut words: Vec<&str> = Vec::new();
        if self.contains(Self::PUBLIC) {
            words.push("public");
        } else if self.contains(Self::PRIVATE) {
            words.push("private");
        } else if self.contains(Self::PROTECTED) {
            words.push("protected");
        }

        for (flag, word) in RENDER_ORDER {
            if self.contains(flag) {
                words.push(word);
            }
        }

        words.join(" ")
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
