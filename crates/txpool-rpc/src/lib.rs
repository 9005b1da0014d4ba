// SPDX-License-Identifier: MIT or Apache-2.0
//! Read-only `txpool` JSON-RPC namespace over an external transaction pool.
//!
//! The namespace reports on a pool it does not own: an embedding node passes
//! a [PoolBackend] handle to [TxPoolRpcExt] and merges the generated RPC
//! module into its server. A backend failure never surfaces to RPC callers;
//! responses degrade to empty payloads and `txpool_status` carries a
//! `success` flag distinguishing an empty pool from an unreachable one.

mod error;
mod rpc_ext;
mod types;

pub use error::{rpc_err, TxPoolRpcError, TxPoolRpcResult};
pub use rpc_ext::{PoolSnapshot, TxPoolApiServer, TxPoolRpcExt};
pub use types::{
    InspectEntry, PoolTransactionSummary, TxPoolContent, TxPoolInspect, TxPoolStatus,
};

use pool_types::{PoolBackendResult, PooledTransaction};

/// Trait used to query the externally owned transaction pool for our RPC extension
/// (txpool namespace).
pub trait PoolBackend {
    /// Return the transactions currently pending in the pool.
    fn pending_transactions(&self) -> PoolBackendResult<Vec<PooledTransaction>>;
}
