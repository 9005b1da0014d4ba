//! Wire-level tests for the `txpool` namespace over HTTP.
//!
//! These drive a real jsonrpsee server the way an embedding node would and
//! assert the raw JSON payloads callers observe.

#![allow(unused_crate_dependencies)]

use jsonrpsee::{
    core::client::ClientT,
    http_client::{HttpClient, HttpClientBuilder},
    rpc_params,
    server::{Server, ServerHandle},
    types::error::ErrorCode,
};
use pool_types::{
    test_utils::{init_test_tracing, undecodable_transaction, TransactionFactory},
    PoolBackendError, PoolBackendResult, PooledTransaction,
};
use serde_json::{json, Value};
use txpool_rpc::{PoolBackend, TxPoolApiServer, TxPoolRpcExt};

/// Backend that answers every query with a fixed set of transactions.
#[derive(Debug, Default)]
struct StaticPool {
    pending: Vec<PooledTransaction>,
}

impl PoolBackend for StaticPool {
    fn pending_transactions(&self) -> PoolBackendResult<Vec<PooledTransaction>> {
        Ok(self.pending.clone())
    }
}

/// Backend that fails every query.
#[derive(Debug)]
struct FailingPool;

impl PoolBackend for FailingPool {
    fn pending_transactions(&self) -> PoolBackendResult<Vec<PooledTransaction>> {
        Err(PoolBackendError::new("pool offline"))
    }
}

/// Spawn a server exposing only the txpool namespace and connect a client.
async fn spawn_txpool_server<P>(pool: P) -> eyre::Result<(ServerHandle, HttpClient)>
where
    P: PoolBackend + Send + Sync + 'static,
{
    init_test_tracing();
    let server = Server::builder().build("127.0.0.1:0").await?;
    let addr = server.local_addr()?;
    let handle = server.start(TxPoolRpcExt::new(pool).into_rpc());
    let client = HttpClientBuilder::default().build(format!("http://{addr}"))?;
    Ok((handle, client))
}

/// The JSON map key a hash serializes to.
fn hash_key(hash: alloy::primitives::TxHash) -> String {
    serde_json::to_value(hash)
        .expect("hash serializes")
        .as_str()
        .expect("hash serializes as a string")
        .to_owned()
}

#[tokio::test]
async fn test_content_is_empty_over_http() -> eyre::Result<()> {
    let mut factory = TransactionFactory::new();
    let (_, t1) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (_, t2) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (_handle, client) = spawn_txpool_server(StaticPool { pending: vec![t1, t2] }).await?;

    let content: Value = client.request("txpool_content", rpc_params![]).await?;
    assert_eq!(content, json!({ "pending": {}, "queued": {} }));
    Ok(())
}

#[tokio::test]
async fn test_inspect_keys_pending_by_hash_over_http() -> eyre::Result<()> {
    let mut factory = TransactionFactory::new();
    let (h1, t1) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (h2, t2) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (h3, t3) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (_handle, client) = spawn_txpool_server(StaticPool { pending: vec![t1, t2, t3] }).await?;

    let inspect: Value = client.request("txpool_inspect", rpc_params![]).await?;
    let mut pending = serde_json::Map::new();
    for hash in [h1, h2, h3] {
        pending.insert(hash_key(hash), json!({}));
    }
    assert_eq!(inspect, json!({ "pending": pending, "queued": {} }));
    Ok(())
}

#[tokio::test]
async fn test_inspect_skips_undecodable_over_http() -> eyre::Result<()> {
    let mut factory = TransactionFactory::new();
    let (hash, raw) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let pool = StaticPool { pending: vec![raw, undecodable_transaction()] };
    let (_handle, client) = spawn_txpool_server(pool).await?;

    let inspect: Value = client.request("txpool_inspect", rpc_params![]).await?;
    assert_eq!(inspect, json!({ "pending": { (hash_key(hash)): {} }, "queued": {} }));
    Ok(())
}

#[tokio::test]
async fn test_status_reports_counts_over_http() -> eyre::Result<()> {
    let mut factory = TransactionFactory::new();
    let pending = (0..3)
        .map(|_| factory.create_eip1559(2017, None, Default::default(), Default::default()).1)
        .collect();
    let (_handle, client) = spawn_txpool_server(StaticPool { pending }).await?;

    let status: Value = client.request("txpool_status", rpc_params![]).await?;
    assert_eq!(status, json!({ "pending": "0x3", "queued": "0x0", "success": "0x1" }));
    Ok(())
}

#[tokio::test]
async fn test_status_distinguishes_empty_pool_from_unreachable_pool() -> eyre::Result<()> {
    let (_handle, client) = spawn_txpool_server(StaticPool::default()).await?;
    let empty: Value = client.request("txpool_status", rpc_params![]).await?;
    assert_eq!(empty, json!({ "pending": "0x0", "queued": "0x0", "success": "0x1" }));

    let (_handle, client) = spawn_txpool_server(FailingPool).await?;
    let unreachable: Value = client.request("txpool_status", rpc_params![]).await?;
    assert_eq!(unreachable, json!({ "pending": "0x0", "queued": "0x0", "success": "0x0" }));
    Ok(())
}

#[tokio::test]
async fn test_degraded_backend_empties_every_response() -> eyre::Result<()> {
    let (_handle, client) = spawn_txpool_server(FailingPool).await?;

    let content: Value = client.request("txpool_content", rpc_params![]).await?;
    assert_eq!(content, json!({ "pending": {}, "queued": {} }));

    let inspect: Value = client.request("txpool_inspect", rpc_params![]).await?;
    assert_eq!(inspect, json!({ "pending": {}, "queued": {} }));

    let status: Value = client.request("txpool_status", rpc_params![]).await?;
    assert_eq!(status, json!({ "pending": "0x0", "queued": "0x0", "success": "0x0" }));
    Ok(())
}

#[tokio::test]
async fn test_content_from_is_not_in_the_namespace() -> eyre::Result<()> {
    let (_handle, client) = spawn_txpool_server(StaticPool::default()).await?;

    let err = client
        .request::<Value, _>("txpool_contentFrom", rpc_params![])
        .await
        .expect_err("method is not registered");
    match err {
        jsonrpsee::core::client::Error::Call(object) => {
            assert_eq!(object.code(), ErrorCode::MethodNotFound.code());
        }
        other => panic!("unexpected client error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_repeated_calls_return_identical_payloads() -> eyre::Result<()> {
    let mut factory = TransactionFactory::new();
    let (_, t1) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (_, t2) = factory.create_eip1559(2017, None, Default::default(), Default::default());
    let (_handle, client) = spawn_txpool_server(StaticPool { pending: vec![t1, t2] }).await?;

    for method in ["txpool_content", "txpool_inspect", "txpool_status"] {
        let first: Value = client.request(method, rpc_params![]).await?;
        let second: Value = client.request(method, rpc_params![]).await?;
        assert_eq!(first, second, "{method} is not idempotent");
    }
    Ok(())
}
