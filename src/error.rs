//! Error type for the fallible edges of the crate
//!
//! The homology core itself is total over well-formed inputs. Errors only
//! arise while validating inputs (distance matrices, configuration) and
//! while (de)serializing barcodes.

use thiserror::Error;

/// Errors reported by input validation and barcode export
#[derive(Debug, Error)]
pub enum PhomError {
    /// An explicit metric space needs a square distance matrix
    #[error("distance matrix must be square, got {rows}x{cols}")]
    NonSquareDistanceMatrix { rows: usize, cols: usize },

    /// A configuration value is out of range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Barcode JSON could not be written or read
    #[error("barcode serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PhomError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PhomError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = PhomError::NonSquareDistanceMatrix { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "distance matrix must be square, got 2x3");

        let e = PhomError::invalid("max_filtration", "must be finite");
        assert_eq!(e.to_string(), "invalid parameter `max_filtration`: must be finite");
    }
}
