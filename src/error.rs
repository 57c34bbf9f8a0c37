use std::{error, fmt};

/// Errors produced by the block transforms.
///
/// The predictor itself never fails during steady operation. Transform
/// errors other than `InvalidData` are recoverable: the caller may retry
/// with a larger destination or emit the block untransformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The destination buffer cannot hold the worst-case output.
    BufferTooSmall { size: usize, required: usize },
    /// The block did not pass the text heuristics.
    NotText,
    /// The block does not look like x86 code (too few relative jumps).
    NotBinary,
    /// The transformed block would not be smaller than the input.
    Incompressible,
    /// The encoded input is malformed; fatal for this block.
    InvalidData { offset: usize, reason: &'static str },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::BufferTooSmall { size, required } => {
                write!(f, "output buffer is too small - size: {size}, required: {required}")
            }
            TransformError::NotText => {
                write!(f, "input is not text, skipping")
            }
            TransformError::NotBinary => {
                write!(f, "not a binary or not enough jumps")
            }
            TransformError::Incompressible => {
                write!(f, "input not compressed")
            }
            TransformError::InvalidData { offset, reason } => {
                write!(f, "invalid input data at byte {offset}: {reason}")
            }
        }
    }
}

impl error::Error for TransformError {}
