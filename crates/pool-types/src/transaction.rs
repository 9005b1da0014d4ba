//! Opaque and decoded views of a pool transaction.

use crate::error::TxDecodeError;
use alloy::{
    consensus::{Transaction as _, TxEnvelope},
    eips::eip2718::Decodable2718 as _,
    primitives::{Bytes, ChainId, TxHash},
};
use serde::{Deserialize, Serialize};

/// Chain scope that accepts transactions declaring any chain id.
pub const ANY_CHAIN: ChainId = 0;

/// A transaction held by the pool, in EIP-2718 wire encoding.
///
/// The pool does not interpret these bytes. Anything the backend returns is
/// representable, including bytes that fail to decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PooledTransaction(Bytes);

impl PooledTransaction {
    /// Create a new pooled transaction from wire bytes.
    pub fn new(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// The wire encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the wire encoding.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the wire encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Bytes> for PooledTransaction {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for PooledTransaction {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for PooledTransaction {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A pooled transaction decoded into a signed EVM envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTransaction {
    /// The transaction hash.
    hash: TxHash,
    /// The signed envelope.
    envelope: TxEnvelope,
}

impl DecodedTransaction {
    /// Decode pooled bytes scoped to a chain id.
    ///
    /// The [ANY_CHAIN] scope accepts envelopes for any chain. A non-zero
    /// scope rejects envelopes declaring a different chain id. Envelopes
    /// without a chain id (pre-EIP-155 legacy) decode under any scope.
    pub fn decode(raw: &PooledTransaction, chain: ChainId) -> Result<Self, TxDecodeError> {
        let mut buf = raw.as_bytes();
        let envelope = TxEnvelope::decode_2718(&mut buf)?;

        if chain != ANY_CHAIN {
            if let Some(actual) = envelope.chain_id() {
                if actual != chain {
                    return Err(TxDecodeError::ChainMismatch { expected: chain, actual });
                }
            }
        }

        let hash = *envelope.tx_hash();
        Ok(Self { hash, envelope })
    }

    /// The transaction hash.
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// The signed envelope.
    pub fn envelope(&self) -> &TxEnvelope {
        &self.envelope
    }
}
