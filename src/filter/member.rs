use std::sync::{Arc, OnceLock};

use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{
    filter::{Filter, FilterRc},
    metadata::{MemberKind, MemberView, Modifiers},
};

/// A reference-counted filter over class members
pub type MemberFilterRc = FilterRc<MemberView>;

/// Predefined class member filters.
///
/// Each variant is backed by one shared instance (see [`MemberFilter::rc`]), so combining a
/// variant with itself through [`crate::filter::and`] or [`crate::filter::or`] is a no-op.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum MemberFilter {
    /// Accepts all members.
    All,
    /// Accepts only fields.
    Field,
    /// Accepts only methods that are not constructors or static initializers.
    Method,
    /// Accepts only constructors.
    Init,
    /// Accepts only static initializers.
    Clinit,
    /// Accepts methods, constructors, and static initializers.
    Executable,
    /// Accepts only members with the `native` modifier.
    Native,
    /// Accepts members that are `public` or `protected` in a `public` or `protected` class.
    Visible,
}

impl MemberFilter {
    /// The shared instance of this filter.
    #[must_use]
    pub fn rc(self) -> MemberFilterRc {
        static REGISTRY: OnceLock<Vec<MemberFilterRc>> = OnceLock::new();

        let registry = REGISTRY.get_or_init(|| {
            MemberFilter::iter()
                .map(|filter| Arc::new(filter) as MemberFilterRc)
                .collect()
        });
        debug_assert_eq!(registry.len(), MemberFilter::COUNT);

        registry[self as usize].clone()
    }
}

impl Filter<MemberView> for MemberFilter {
    fn accept(&self, member: &MemberView) -> bool {
        match self {
            MemberFilter::All => true,
            MemberFilter::Field => member.kind == MemberKind::Field,
            MemberFilter::Method => member.kind == MemberKind::Method,
            MemberFilter::Init => member.kind == MemberKind::Constructor,
            MemberFilter::Clinit => member.kind == MemberKind::StaticInitializer,
            MemberFilter::Executable => member.kind.is_executable(),
            MemberFilter::Native => member.modifiers.contains(Modifiers::NATIVE),
            MemberFilter::Visible => {
                member.declaring.modifiers.is_public_or_protected()
                    && member.modifiers.is_public_or_protected()
            }
        }
    }

    fn name(&self) -> String {
        self.to_string()
    }
}
