pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_history_table, format_report, format_session,
    should_use_colors,
};
