//! Structured class metadata consumed by the filter and format pipeline.
//!
//! # Key Types
//! - [`ClassView`], [`ClassInfo`]: a resolved class and its shared class-level information
//! - [`MemberView`], [`MemberKind`]: one field, method, constructor, or static initializer
//! - [`Modifiers`]: class and member modifier flags
//! - [`ClassRaw`], [`MemberRaw`]: serializable form used by class catalogs

mod class;
mod modifiers;

pub use class::{
    ClassInfo, ClassInfoRc, ClassRaw, ClassView, MemberKind, MemberRaw, MemberView,
    CONSTRUCTOR_NAME, STATIC_INITIALIZER_NAME,
};
pub use modifiers::{Modifiers, ACCESS_MODIFIERS_MASK};
