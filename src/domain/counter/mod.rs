//! The counter account, its derived address and the remote-call contract.

use async_trait::async_trait;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;

pub mod account;
pub mod address;
pub mod error;

pub use account::CounterAccount;
pub use address::{counter_address, COUNTER_SEED};
pub use error::CounterError;

/// Remote calls the runners issue against the counter program.
///
/// The RPC-backed implementation lives in `infra::solana`; tests provide an in-memory ledger.
#[async_trait]
pub trait CounterProgram: Send + Sync {
    /// Identity every transaction is signed with.
    fn identity(&self) -> Pubkey;

    fn program_id(&self) -> Pubkey;

    /// Caller balance in lamports.
    async fn balance(&self) -> Result<u64, CounterError>;

    /// Reads the counter at `address`, failing with `AccountNotFound` if it was never created.
    async fn fetch_counter(&self, address: &Pubkey) -> Result<CounterAccount, CounterError>;

    /// Creates the counter at `address` with `count = 0` and the caller as authority.
    async fn initialize(&self, address: &Pubkey) -> Result<Signature, CounterError>;

    /// Adds one to the counter at `address`.
    async fn increment(&self, address: &Pubkey) -> Result<Signature, CounterError>;

    /// Counter address of the calling identity.
    fn counter_address(&self) -> Pubkey {
        counter_address(&self.program_id(), &self.identity()).0
    }
}
