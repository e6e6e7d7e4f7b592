pub mod interpreter;

pub use interpreter::{evaluate, evaluate_str, format_result};
