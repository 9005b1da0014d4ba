//! Helpers for building deterministic pool transactions in tests.

use crate::PooledTransaction;
use alloy::{
    consensus::{SignableTransaction as _, TxEip1559, TxEnvelope, TxLegacy},
    eips::{eip1559::MIN_PROTOCOL_BASE_FEE, eip2718::Encodable2718 as _},
    primitives::{Address, Bytes, ChainId, TxHash, TxKind, U256},
    signers::{local::PrivateKeySigner, SignerSync as _},
};

/// Transaction factory.
#[derive(Clone, Debug)]
pub struct TransactionFactory {
    /// Signer for transactions.
    signer: PrivateKeySigner,
    /// The nonce for the next transaction constructed.
    nonce: u64,
}

impl Default for TransactionFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFactory {
    /// Create a new instance of self from a fixed secret.
    ///
    /// Address: 0x7e5f4552091a69125d5dfcb7b8c2659029395bdf
    /// Secret: 0000000000000000000000000000000000000000000000000000000000000001
    pub fn new() -> Self {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let signer =
            PrivateKeySigner::from_bytes(&secret.into()).expect("nonzero secret within curve order");
        Self { signer, nonce: 0 }
    }

    /// Return the address of the signer.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Change the nonce for the next transaction.
    pub fn set_nonce(&mut self, nonce: u64) {
        self.nonce = nonce;
    }

    /// Increment nonce after a transaction was created and signed.
    pub fn inc_nonce(&mut self) {
        self.nonce += 1;
    }

    /// Create and sign an EIP1559 transaction, returning the typed envelope.
    pub fn create_eip1559_envelope(
        &mut self,
        chain_id: ChainId,
        to: Option<Address>,
        value: U256,
        input: Bytes,
    ) -> TxEnvelope {
        let to = match to {
            Some(address) => TxKind::Call(address),
            None => TxKind::Create,
        };

        let transaction = TxEip1559 {
            chain_id,
            nonce: self.nonce,
            max_priority_fee_per_gas: 0,
            max_fee_per_gas: MIN_PROTOCOL_BASE_FEE as u128,
            gas_limit: 1_000_000,
            to,
            value,
            input,
            access_list: Default::default(),
        };

        let signature = self
            .signer
            .sign_hash_sync(&transaction.signature_hash())
            .expect("failed to sign transaction");

        // increase nonce for next tx
        self.inc_nonce();

        transaction.into_signed(signature).into()
    }

    /// Create and sign an EIP1559 transaction, returning its hash and wire encoding.
    pub fn create_eip1559(
        &mut self,
        chain_id: ChainId,
        to: Option<Address>,
        value: U256,
        input: Bytes,
    ) -> (TxHash, PooledTransaction) {
        let envelope = self.create_eip1559_envelope(chain_id, to, value, input);
        (*envelope.tx_hash(), PooledTransaction::from(envelope.encoded_2718()))
    }

    /// Create and sign a legacy transaction without a chain id, returning the
    /// typed envelope.
    pub fn create_pre_eip155_legacy_envelope(&mut self, to: Option<Address>) -> TxEnvelope {
        let to = match to {
            Some(address) => TxKind::Call(address),
            None => TxKind::Create,
        };

        let transaction = TxLegacy {
            chain_id: None,
            nonce: self.nonce,
            gas_price: MIN_PROTOCOL_BASE_FEE as u128,
            gas_limit: 1_000_000,
            to,
            value: U256::from(1),
            input: Bytes::new(),
        };

        let signature = self
            .signer
            .sign_hash_sync(&transaction.signature_hash())
            .expect("failed to sign transaction");

        // increase nonce for next tx
        self.inc_nonce();

        transaction.into_signed(signature).into()
    }

    /// Create and sign a legacy transaction without a chain id.
    pub fn create_pre_eip155_legacy(&mut self, to: Option<Address>) -> (TxHash, PooledTransaction) {
        let envelope = self.create_pre_eip155_legacy_envelope(to);
        (*envelope.tx_hash(), PooledTransaction::from(envelope.encoded_2718()))
    }
}

/// Bytes that fail EIP-2718 envelope decoding.
///
/// 0x7f is not a known envelope type and is below the RLP list range used by
/// legacy transactions.
pub fn undecodable_transaction() -> PooledTransaction {
    PooledTransaction::from(vec![0x7f; 24])
}

/// Initialize a debug-level fmt subscriber for tests.
///
/// Repeated calls are a no-op.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}
