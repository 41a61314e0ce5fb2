// src/reporting/mod.rs
pub mod console;
pub mod diff;
pub mod shared;

pub use console::{print_file_report, print_project_report, print_rules};
pub use diff::{print_conversion, print_diff_summary, print_side_by_side, print_unified};
pub use shared::print_json;
