pub mod logging;
pub mod text_processing;

pub use logging::{LOG_PATH_ENV, LogTarget, default_log_path, init_tracing, resolve_log_path};
pub use text_processing::{format_key_value_table, format_number, join_values, truncate_to_width};
