// SPDX-License-Identifier: MIT or Apache-2.0
//! Types shared across the transaction pool boundary.
//!
//! The pool hands out transactions as opaque wire bytes ([PooledTransaction]).
//! Consumers that need transaction identity or fields decode them into a
//! signed EVM envelope ([DecodedTransaction]) scoped to a chain id.

mod error;
mod transaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{PoolBackendError, PoolBackendResult, TxDecodeError};
pub use transaction::{DecodedTransaction, PooledTransaction, ANY_CHAIN};
