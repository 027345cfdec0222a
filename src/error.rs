//! Error types for physics operations.

use core::fmt;

/// Errors that can occur during physics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Radius must be non-negative and finite.
    InvalidRadius,
    /// Time step must be non-negative and finite.
    InvalidTimeStep,
    /// Guarded division by a zero scalar.
    DivideByZero,
    /// Operands of a binary vector operation differ in dimension.
    DimensionMismatch { expected: usize, found: usize },
    /// Body index is out of bounds.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRadius => write!(f, "radius must be non-negative and finite"),
            PhysicsError::InvalidTimeStep => write!(f, "time step must be non-negative and finite"),
            PhysicsError::DivideByZero => write!(f, "division by zero"),
            PhysicsError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
