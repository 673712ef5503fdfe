//! Field status checks invoked by `#[derive(Config)]`.
//!
//! The generated `validate_field_status` calls into these whenever a field
//! marked experimental, deprecated or not implemented differs from its default.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
    NotImplemented,
    Deprecated,
}

impl FieldStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::NotImplemented => "not implemented",
            Self::Deprecated => "deprecated",
        }
    }
}

/// Report a non-default field with special status.
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    if status == FieldStatus::Experimental && diag.allow_experimental {
        return;
    }

    let path = FieldPath::new(Box::leak(field_path.to_string().into_boxed_str()));
    report(path, status, "field", diag);
}

/// Report a non-default section with special status.
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    if status == FieldStatus::Experimental && diag.allow_experimental {
        return;
    }

    let path = FieldPath::new(Box::leak(format!("[{section}]").into_boxed_str()));
    report(path, status, "section", diag);
}

fn report(path: FieldPath, status: FieldStatus, what: &str, diag: &mut ConfigDiagnostics) {
    match status {
        FieldStatus::NotImplemented => diag.error_with_hint(
            path,
            format!("this {what} is {}", status.label()),
            format!("remove this {what}"),
        ),
        FieldStatus::Deprecated => diag.warn(
            path,
            format!("this {what} is {} and will be removed in a future version", status.label()),
        ),
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}
