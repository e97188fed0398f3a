use crate::{
    filter::MemberFilterRc,
    format::{
        active_filter, parameter_list, return_type, signature, tagged_suffix, ClassFormatter,
        LINE_END,
    },
    metadata::{MemberView, Modifiers},
    Result,
};

/// Two column rows of class name and member signature.
///
/// ```text
/// class,method/field sig
/// "pkg.A","int count"
/// "pkg.A","void put(java.lang.String,int[])"
/// ```
pub struct CsvFormatter {
    caller: Option<MemberFilterRc>,
    filter: MemberFilterRc,
}

impl CsvFormatter {
    /// Render the members accepted by `filter`, or all members
    pub fn new(filter: Option<MemberFilterRc>) -> Self {
        CsvFormatter {
            filter: active_filter(filter.as_ref()),
            caller: filter,
        }
    }
}

impl ClassFormatter for CsvFormatter {
    fn header(&self) -> String {
        format!("class,method/field sig{LINE_END}")
    }

    fn filter(&self) -> &MemberFilterRc {
        &self.filter
    }

    fn format_member(&self, member: &MemberView) -> Result<String> {
        Ok(format!(
            "\"{}\",\"{}\"{}",
            member.declaring.name,
            signature(member),
            LINE_END
        ))
    }

    fn filename_suffix(&self) -> String {
        self.caller
            .as_ref()
            .map(|filter| filter.name())
            .unwrap_or_default()
    }

    fn file_extension(&self) -> &'static str {
        ".csv"
    }
}

/// One row per member with class and member modifiers split into access and other.
///
/// Fields are tagged `F`, executables `M` and carry four more columns: varargs, synthetic,
/// bridge (each `0` or `1`) and the parameter list.
///
/// ```text
/// ,CLASS,CLASS,CLASS,M/F,M/F,M/F Type,M/F Name,varg,syn,bridge,params
/// F,"public","","pkg.A","public","static final","int","MAX"
/// M,"public","","pkg.A","public","","void","put",0,0,0,"java.lang.String,int[]"
/// ```
///
/// The class "other" column never shows `synchronized`, that bit is `ACC_SUPER` on classes.
/// The method "other" column never shows `transient` or `volatile`, those bits are varargs
/// and bridge on methods.
pub struct CsvDetailFormatter {
    caller: Option<MemberFilterRc>,
    filter: MemberFilterRc,
}

impl CsvDetailFormatter {
    /// Render the members accepted by `filter`, or all members
    pub fn new(filter: Option<MemberFilterRc>) -> Self {
        CsvDetailFormatter {
            filter: active_filter(filter.as_ref()),
            caller: filter,
        }
    }

    fn common_columns(member: &MemberView, other: Modifiers, ty: &str) -> String {
        let class = &member.declaring;
        format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            class.modifiers.access(),
            class.modifiers.non_access() - Modifiers::SYNCHRONIZED,
            class.name,
            member.modifiers.access(),
            other,
            ty,
            member.name
        )
    }
}

impl ClassFormatter for CsvDetailFormatter {
    fn header(&self) -> String {
        format!(",CLASS,CLASS,CLASS,M/F,M/F,M/F Type,M/F Name,varg,syn,bridge,params{LINE_END}")
    }

    fn filter(&self) -> &MemberFilterRc {
        &self.filter
    }

    fn format_member(&self, member: &MemberView) -> Result<String> {
        if member.is_field() {
            return Ok(format!(
                "F,{}{}",
                Self::common_columns(member, member.modifiers.non_access(), &member.ty),
                LINE_END
            ));
        }

        let other = member.modifiers.non_access() - (Modifiers::TRANSIENT | Modifiers::VOLATILE);
        Ok(format!(
            "M,{},{},{},{},\"{}\"{}",
            Self::common_columns(member, other, return_type(member)),
            u8::from(member.varargs),
            u8::from(member.synthetic),
            u8::from(member.bridge),
            parameter_list(member),
            LINE_END
        ))
    }

    fn filename_suffix(&self) -> String {
        tagged_suffix(self.caller.as_ref(), "detail")
    }

    fn file_extension(&self) -> &'static str {
        ".csv"
    }
}
