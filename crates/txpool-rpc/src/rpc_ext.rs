//! RPC extension implementing the read-only `txpool` namespace.

use crate::{
    error::TxPoolRpcResult,
    types::{InspectEntry, TxPoolContent, TxPoolInspect, TxPoolStatus},
    PoolBackend,
};
use async_trait::async_trait;
use jsonrpsee::proc_macros::rpc;
use pool_types::{DecodedTransaction, PooledTransaction, ANY_CHAIN};
use tracing::debug;

/// txpool RPC namespace.
///
/// Read-only inspection endpoints for the pending transaction pool.
#[rpc(server, namespace = "txpool")]
pub trait TxPoolApi {
    /// Return pool transactions grouped by sender account and nonce.
    #[method(name = "content")]
    async fn content(&self) -> TxPoolRpcResult<TxPoolContent>;
    /// Return a summary of each pool transaction, keyed by hash.
    #[method(name = "inspect")]
    async fn inspect(&self) -> TxPoolRpcResult<TxPoolInspect>;
    /// Return the number of pool transactions per partition.
    #[method(name = "status")]
    async fn status(&self) -> TxPoolRpcResult<TxPoolStatus>;
}

/// One query of the backend's pending set.
///
/// A backend failure is absorbed into [PoolSnapshot::Degraded]: callers
/// respond with empty payloads instead of surfacing the error.
#[derive(Debug, Clone)]
pub enum PoolSnapshot {
    /// The backend answered with the pending transactions.
    Available(Vec<PooledTransaction>),
    /// The backend failed to answer.
    Degraded,
}

/// The type that implements the `txpool` namespace trait.
#[derive(Debug)]
pub struct TxPoolRpcExt<P: PoolBackend> {
    /// Handle to the externally owned transaction pool.
    pool: P,
}

impl<P: PoolBackend> TxPoolRpcExt<P> {
    /// Create new instance of the txpool RPC extension.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    /// Query the backend once for the current pending set.
    fn pending_snapshot(&self) -> PoolSnapshot {
        match self.pool.pending_transactions() {
            Ok(pending) => PoolSnapshot::Available(pending),
            Err(error) => {
                debug!(target: "txpool", ?error, "pool backend unavailable");
                PoolSnapshot::Degraded
            }
        }
    }
}

#[async_trait]
impl<P: PoolBackend> TxPoolApiServer for TxPoolRpcExt<P>
where
    P: Send + Sync + 'static,
{
    async fn content(&self) -> TxPoolRpcResult<TxPoolContent> {
        debug!(target: "txpool", "txpool_content");
        Ok(TxPoolContent::default())
    }

    async fn inspect(&self) -> TxPoolRpcResult<TxPoolInspect> {
        debug!(target: "txpool", "txpool_inspect");

        let mut inspect = TxPoolInspect::default();
        let PoolSnapshot::Available(pending) = self.pending_snapshot() else {
            return Ok(inspect);
        };

        for raw in &pending {
            // bytes that do not decode are left out of the response
            let Ok(decoded) = DecodedTransaction::decode(raw, ANY_CHAIN) else { continue };
            inspect.pending.insert(decoded.hash(), InspectEntry::default());
        }

        Ok(inspect)
    }

    async fn status(&self) -> TxPoolRpcResult<TxPoolStatus> {
        debug!(target: "txpool", "txpool_status");
        match self.pending_snapshot() {
            PoolSnapshot::Available(pending) => Ok(TxPoolStatus::available(pending.len())),
            PoolSnapshot::Degraded => Ok(TxPoolStatus::degraded()),
        }
    }
}
