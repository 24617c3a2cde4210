mod adjustment;
mod args;
pub mod completions;

pub use adjustment::{ParseAdjustmentError, parse_operation};
pub use args::Args;
