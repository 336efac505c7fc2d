use std::fmt;

/// Which side of a comparison was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollateError {
    #[error("invalid argument: {0} reading is missing")]
    MissingOperand(Operand),
    #[error("invalid argument: record {index} has no reading")]
    MissingReading { index: usize },
}
