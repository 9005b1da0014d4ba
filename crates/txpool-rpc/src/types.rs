//! Response payloads for the `txpool` namespace.

use alloy::{
    consensus::Transaction as _,
    primitives::{Address, Bytes, TxHash, U256, U64},
};
use pool_types::DecodedTransaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pool transactions returned by `txpool_content`, grouped by sender account
/// and nonce.
///
/// Both partitions are always present on the wire, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxPoolContent {
    /// Transactions eligible for inclusion in upcoming blocks.
    pub pending: HashMap<Address, HashMap<String, PoolTransactionSummary>>,
    /// Transactions waiting on a nonce gap or other account state.
    pub queued: HashMap<Address, HashMap<String, PoolTransactionSummary>>,
}

/// Summary of one pool transaction in `txpool_content` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolTransactionSummary {
    /// The transaction hash.
    pub hash: TxHash,
    /// The sender of the transaction.
    pub from: Address,
    /// The transaction nonce.
    pub nonce: U64,
    /// The recipient, `None` for contract creation.
    pub to: Option<Address>,
    /// The transferred value in wei.
    pub value: U256,
    /// The gas limit.
    pub gas: U64,
    /// The gas price, or the max fee per gas for dynamic-fee transactions.
    pub gas_price: U256,
    /// The calldata.
    pub input: Bytes,
}

impl PoolTransactionSummary {
    /// Build a summary for a decoded pool transaction sent by `from`.
    pub fn from_decoded(from: Address, decoded: &DecodedTransaction) -> Self {
        let tx = decoded.envelope();
        Self {
            hash: decoded.hash(),
            from,
            nonce: U64::from(tx.nonce()),
            to: tx.to(),
            value: tx.value(),
            gas: U64::from(tx.gas_limit()),
            gas_price: U256::from(tx.gas_price().unwrap_or_else(|| tx.max_fee_per_gas())),
            input: tx.input().clone(),
        }
    }
}

/// Pool transactions returned by `txpool_inspect`, keyed by hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPoolInspect {
    /// Transactions eligible for inclusion in upcoming blocks.
    pub pending: HashMap<TxHash, InspectEntry>,
    /// Transactions waiting on a nonce gap or other account state.
    pub queued: HashMap<TxHash, InspectEntry>,
}

/// Human-readable fields for one inspected transaction.
pub type InspectEntry = HashMap<String, String>;

/// Pool counts returned by `txpool_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPoolStatus {
    /// Number of transactions eligible for inclusion in upcoming blocks.
    pub pending: U64,
    /// Number of transactions waiting on account state.
    pub queued: U64,
    /// 1 when the pool answered the query, 0 when it did not.
    pub success: U64,
}

impl TxPoolStatus {
    /// Status for a pool that answered with `pending` transactions.
    pub fn available(pending: usize) -> Self {
        Self { pending: U64::from(pending as u64), queued: U64::ZERO, success: U64::from(1u64) }
    }

    /// Status for a pool that failed to answer.
    pub fn degraded() -> Self {
        Self { pending: U64::ZERO, queued: U64::ZERO, success: U64::ZERO }
    }
}
