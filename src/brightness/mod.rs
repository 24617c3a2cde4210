mod operation;
mod ratio;

pub use operation::Operation;
pub use ratio::{Adjustment, BrightnessState};
