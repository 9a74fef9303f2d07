mod format;
mod projects;
mod records;

pub(crate) use format::format_optional_duration;
pub(crate) use projects::{output_project_json, print_project_table};
pub(crate) use records::{output_record_json, print_record_table};
