use crate::{
    brightness::Operation,
    error::{BacklightError, Result},
};

/// Brightness read from a device: raw current value and the device maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessState {
    pub current: u64,
    pub max: u64,
}

/// Result of applying an [`Operation`] to a [`BrightnessState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// New raw value, always within `0..=max`
    pub value: u64,
    /// Clamped ratio the value was derived from
    pub ratio: f64,
}

impl Adjustment {
    /// Percentage shown to the user.
    ///
    /// Derived from the clamped ratio, not from `value / max`, so it can
    /// differ from the on-disk value by one after rounding. A later `Get`
    /// reports the same percent only when `p * max / 100` is an integer: on a
    /// 255 scale `=50` writes 127 and shows 50%, then `Get` shows 49%.
    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0) as u32
    }
}

impl BrightnessState {
    pub fn ratio(&self) -> f64 {
        self.current.min(self.max) as f64 / self.max as f64
    }

    /// Computes the brightness an operation asks for.
    ///
    /// Every operation works on ratios of the device maximum so that percent
    /// deltas behave the same regardless of the native integer range:
    ///
    /// - `Get` keeps the current ratio and returns the current value as is
    /// - `Set(p)` targets `p / 100`
    /// - `Increase(p)` / `Decrease(p)` shift the current ratio by `p / 100`
    ///
    /// The target ratio is clamped to `[0.0, 1.0]` and the new value is
    /// `floor(ratio * max)`.
    ///
    /// # Errors
    ///
    /// A zero maximum is reported as [`BacklightError::Invariant`].
    ///
    /// # Examples
    ///
    /// ```
    /// use backlight::brightness::{BrightnessState, Operation};
    ///
    /// let state = BrightnessState { current: 0, max: 255 };
    /// let adjustment = state.apply(Operation::Set(50)).unwrap();
    /// assert_eq!(adjustment.value, 127);
    /// assert_eq!(adjustment.percent(), 50);
    /// ```
    pub fn apply(&self, operation: Operation) -> Result<Adjustment> {
        if self.max == 0 {
            return Err(BacklightError::Invariant(
                "device reports a maximum brightness of 0".to_string(),
            ));
        }

        let current_ratio = self.ratio();
        let requested = match operation {
            // ratio * max does not always round-trip in f64
            Operation::Get => {
                return Ok(Adjustment {
                    value: self.current.min(self.max),
                    ratio: current_ratio,
                });
            }
            Operation::Set(p) => percent_to_ratio(p),
            Operation::Increase(p) => current_ratio + percent_to_ratio(p),
            Operation::Decrease(p) => current_ratio - percent_to_ratio(p),
        };
        let ratio = requested.clamp(0.0, 1.0);

        // f64 loses precision above 2^53, keep the result inside the range anyway
        let value = ((ratio * self.max as f64) as u64).min(self.max);

        Ok(Adjustment { value, ratio })
    }
}

fn percent_to_ratio(percent: u64) -> f64 {
    percent as f64 / 100.0
}
