//! Public errors for txpool RPC endpoints.
//!
//! These errors are returned by the RPC for public requests to the `txpool`
//! namespace.

use alloy::hex;
use thiserror::Error;

/// The result type for the txpool RPC namespace.
pub type TxPoolRpcResult<T> = Result<T, TxPoolRpcError>;

/// Error type for public RPC endpoints in the `txpool` namespace.
///
/// The namespace degrades to empty responses instead of failing, so no
/// variants exist. The type keeps the error seam in method signatures for
/// endpoints that may fail.
#[derive(Debug, Error)]
pub enum TxPoolRpcError {}

impl From<TxPoolRpcError> for jsonrpsee_types::ErrorObject<'static> {
    fn from(error: TxPoolRpcError) -> Self {
        match error {}
    }
}

/// Constructs a JSON-RPC error for jsonrpsee compatibility.
pub fn rpc_err(
    code: i32,
    msg: impl Into<String>,
    data: Option<&[u8]>,
) -> jsonrpsee_types::ErrorObject<'static> {
    jsonrpsee_types::ErrorObject::owned(
        code,
        msg.into(),
        data.map(|data| {
            jsonrpsee::core::to_json_raw_value(&hex::encode_prefixed(data))
                .expect("string is serializable")
        }),
    )
}
