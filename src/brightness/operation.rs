use std::fmt;

/// What to do with the backlight on this invocation.
///
/// Every variant except `Get` carries a percent operand. Operands are not
/// bounded here; values past 100 saturate when the ratio is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Get,
    Set(u64),
    Increase(u64),
    Decrease(u64),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => write!(f, "get"),
            Operation::Set(p) => write!(f, "={p}"),
            Operation::Increase(p) => write!(f, "+{p}"),
            Operation::Decrease(p) => write!(f, "-{p}"),
        }
    }
}
