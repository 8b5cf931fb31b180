/// Errors from lattice construction and checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    #[error("invalid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i64, height: i64 },
    #[error("coordinate overflow adding {lhs} and {rhs}")]
    ArithmeticOverflow {
        lhs: crate::Point,
        rhs: crate::Point,
    },
}

pub type Result<T> = std::result::Result<T, LatticeError>;
