//! Errors for the pool boundary.

use alloy::{eips::eip2718::Eip2718Error, primitives::ChainId};
use thiserror::Error;

/// The result type for pool backend queries.
pub type PoolBackendResult<T> = Result<T, PoolBackendError>;

/// The pool backend failed to answer a query.
///
/// The single failure mode of the boundary. The backend owns retry and
/// timeout policy, so only the description of the failure crosses over.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("pool backend query failed: {reason}")]
pub struct PoolBackendError {
    /// Backend-specific description of the failure.
    pub reason: String,
}

impl PoolBackendError {
    /// Create a new error from a displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Error decoding pooled bytes into a signed EVM envelope.
#[derive(Debug, Error)]
pub enum TxDecodeError {
    /// The bytes are not a valid EIP-2718 envelope.
    #[error(transparent)]
    Format(#[from] Eip2718Error),
    /// The envelope declares a chain id outside the decoding scope.
    #[error("transaction for chain {actual} outside decoding scope {expected}")]
    ChainMismatch {
        /// The chain id the decoder was scoped to.
        expected: ChainId,
        /// The chain id the envelope declares.
        actual: ChainId,
    },
}
