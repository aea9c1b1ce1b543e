pub mod file_utils;
pub mod log_utils;
pub mod report_utils;
pub mod url_utils;

pub use file_utils::save_results;
pub use log_utils::init_logging;
pub use report_utils::{print_report, render_report};
pub use url_utils::normalize_url;
