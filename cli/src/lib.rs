pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod utils;

// Re-export commonly used items
pub use app::{Report, resolve_endpoints, run};
pub use args::{AlgorithmChoice, Args};
pub use utils::{format_bytes, format_cost, format_number, format_path};
