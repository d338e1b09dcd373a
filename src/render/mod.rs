//! Comparison report rendering (text, JSON)

pub mod report;

pub use report::{render_json, render_text, SUCCESS_MESSAGE};
