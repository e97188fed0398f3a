use crate::{
    file::CLASS_FILE_SUFFIX,
    format::{active_filter, tagged_suffix, ClassFormatter},
    filter::MemberFilterRc,
    metadata::{ClassView, MemberView},
    Result,
};

/// One class file path per class that has at least one qualifying member.
///
/// `java.util.Map$Entry` is written as `java/util/Map$Entry.class`. The member filter only
/// decides whether a class is listed. Lines always end in `\n`.
pub struct ClassOnlyFormatter {
    caller: Option<MemberFilterRc>,
    filter: MemberFilterRc,
}

impl ClassOnlyFormatter {
    /// List classes with a member accepted by `filter`, or with any member
    pub fn new(filter: Option<MemberFilterRc>) -> Self {
        ClassOnlyFormatter {
            filter: active_filter(filter.as_ref()),
            caller: filter,
        }
    }
}

impl ClassFormatter for ClassOnlyFormatter {
    fn filter(&self) -> &MemberFilterRc {
        &self.filter
    }

    fn format_member(&self, _member: &MemberView) -> Result<String> {
        Ok(String::new())
    }

    fn class_header(&self, class: &ClassView) -> String {
        format!("{}{}\n", class.name().replace('.', "/"), CLASS_FILE_SUFFIX)
    }

    fn filename_suffix(&self) -> String {
        tagged_suffix(self.caller.as_ref(), "ClassNames")
    }

    fn file_extension(&self) -> &'static str {
        ".txt"
    }
}
