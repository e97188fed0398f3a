use crate::{
    filter::{and, MemberFilter, MemberFilterRc},
    format::{signature, ClassFormatter, LINE_END},
    metadata::MemberView,
    Error, Result,
};

/// Signature lines in the format consumed by PScout style permission mappers.
///
/// ```text
/// <pkg.A: int get()>
/// <pkg.A: void put(java.lang.String,int[])>
/// ```
///
/// Every line ends with a single space before the line terminator. Only executables are
/// rendered: the active filter is the caller's filter combined with
/// [`MemberFilter::Executable`].
pub struct PscoutFormatter {
    caller: Option<MemberFilterRc>,
    filter: MemberFilterRc,
}

impl PscoutFormatter {
    /// Render the executables accepted by `filter`, or all executables
    pub fn new(filter: Option<MemberFilterRc>) -> Self {
        let executable = MemberFilter::Executable.rc();
        let active = match &filter {
            Some(filter) => and(filter.clone(), executable),
            None => executable,
        };

        PscoutFormatter {
            caller: filter,
            filter: active,
        }
    }
}

impl ClassFormatter for PscoutFormatter {
    fn filter(&self) -> &MemberFilterRc {
        &self.filter
    }

    fn format_member(&self, member: &MemberView) -> Result<String> {
        if member.is_field() {
            return Err(Error::UnsupportedMember {
                formatter: "PscoutFormatter",
                kind: member.kind,
            });
        }

        Ok(format!(
            "<{}: {}> {}",
            member.declaring.name,
            signature(member),
            LINE_END
        ))
    }

    /// The caller's filter name rather than the active `<filter>-AND-EXECUTABLE` one, so a
    /// `VISIBLE` listing is written to `LIST_VISIBLE.pscout`.
    fn filename_suffix(&self) -> String {
        self.caller
            .as_ref()
            .map(|filter| filter.name())
            .unwrap_or_default()
    }

    fn file_extension(&self) -> &'static str {
        ".pscout"
    }
}
