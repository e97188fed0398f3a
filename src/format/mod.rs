//! Rendering of resolved classes into text.
//!
//! A [`ClassFormatter`] renders the members of one class that pass its member filter. The
//! traversal is shared by all renderers ([`ClassFormatter::format`]): fields first, then
//! methods, each in declaration order, filtered before rendering. Renderers only implement
//! [`ClassFormatter::format_member`] and the output file naming.
//!
//! A class without a single qualifying member renders to `None` and produces no output at
//! all, not even the per-class header.
//!
//! # Renderers
//! - [`CsvFormatter`]: `"<class>","<signature>"` rows
//! - [`CsvDetailFormatter`]: one row per member with modifiers and method flags
//! - [`PscoutFormatter`]: `<class: signature>` lines, executables only
//! - [`ClassOnlyFormatter`]: class file paths of classes with qualifying members
//!
//! # Examples
//!
//! ```rust
//! use jlscope::{
//!     filter::MemberFilter,
//!     format::{ClassFormatter, CsvFormatter},
//! };
//!
//! let formatter = CsvFormatter::new(Some(MemberFilter::Visible.rc()));
//! assert_eq!(formatter.filename_suffix(), "VISIBLE");
//! assert_eq!(formatter.file_extension(), ".csv");
//! ```

mod classonly;
mod csv;
mod pscout;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    filter::{MemberFilter, MemberFilterRc},
    metadata::{ClassView, MemberKind, MemberView},
    utils::{Cursor, Filtered, IterCursor, Sequential},
    Result,
};

pub use classonly::ClassOnlyFormatter;
pub use csv::{CsvDetailFormatter, CsvFormatter};
pub use pscout::PscoutFormatter;

/// Line terminator used by the renderers
#[cfg(windows)]
pub const LINE_END: &str = "\r\n";
/// Line terminator used by the renderers
#[cfg(not(windows))]
pub const LINE_END: &str = "\n";

/// Renders resolved classes.
pub trait ClassFormatter {
    /// Text written once at the start of the output, empty for no header
    fn header(&self) -> String {
        String::new()
    }

    /// The member filter applied before rendering
    fn filter(&self) -> &MemberFilterRc;

    /// Render a single qualifying member, including the line terminator.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedMember`] if this renderer cannot handle the member.
    fn format_member(&self, member: &MemberView) -> Result<String>;

    /// Emitted before the first member of a class with qualifying members
    fn class_header(&self, _class: &ClassView) -> String {
        String::new()
    }

    /// Emitted after the last member of a class with qualifying members
    fn class_footer(&self, _class: &ClassView) -> String {
        String::new()
    }

    /// Render every qualifying member of `class`, or `None` if there is none.
    ///
    /// # Errors
    /// Propagates errors of [`ClassFormatter::format_member`].
    fn format(&self, class: &ClassView) -> Result<Option<String>> {
        let members = Sequential::new([
            IterCursor::new(class.fields.iter()),
            IterCursor::new(class.methods.iter()),
        ]);
        let mut members = Filtered::new(members, self.filter().clone());

        if !members.has_next() {
            return Ok(None);
        }

        let mut output = self.class_header(class);
        for member in members {
            output.push_str(&self.format_member(member)?);
        }
        output.push_str(&self.class_footer(class));

        Ok(Some(output))
    }

    /// Appended to the source tag (with an `_`) to form the output file name, may be empty
    fn filename_suffix(&self) -> String;

    /// Extension of the output file, including the dot
    fn file_extension(&self) -> &'static str;
}

/// The available renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum OutputType {
    /// [`PscoutFormatter`]
    Pscout,
    /// [`CsvFormatter`]
    Csv,
    /// [`CsvDetailFormatter`]
    CsvDetail,
    /// [`ClassOnlyFormatter`]
    ClassOnly,
}

impl OutputType {
    /// Create the renderer for this output type using the member filter `filter`
    #[must_use]
    pub fn formatter(self, filter: Option<MemberFilterRc>) -> Box<dyn ClassFormatter> {
        match self {
            OutputType::Pscout => Box::new(PscoutFormatter::new(filter)),
            OutputType::Csv => Box::new(CsvFormatter::new(filter)),
            OutputType::CsvDetail => Box::new(CsvDetailFormatter::new(filter)),
            OutputType::ClassOnly => Box::new(ClassOnlyFormatter::new(filter)),
        }
    }
}

/// The caller's filter, or [`MemberFilter::All`] if there is none
fn active_filter(filter: Option<&MemberFilterRc>) -> MemberFilterRc {
    filter.cloned().unwrap_or_else(|| MemberFilter::All.rc())
}

/// `<filter>_<tag>`, or just `<tag>` when there is no filter
fn tagged_suffix(filter: Option<&MemberFilterRc>, tag: &str) -> String {
    match filter {
        Some(filter) => format!("{}_{}", filter.name(), tag),
        None => tag.to_string(),
    }
}

/// Declared return type; `void` for constructors and static initializers
fn return_type(member: &MemberView) -> &str {
    match member.kind {
        MemberKind::Constructor | MemberKind::StaticInitializer => "void",
        _ => &member.ty,
    }
}

/// Parameter types separated by `,` without spaces
fn parameter_list(member: &MemberView) -> String {
    member.parameters.join(",")
}

/// `R name(P1,P2)` for executables, `T name` for fields
fn signature(member: &MemberView) -> String {
    if member.is_field() {
        format!("{} {}", member.ty, member.name)
    } else {
        format!(
            "{} {}({})",
            return_type(member),
            member.name,
            parameter_list(member)
        )
    }
}
