use solana_client::client_error::ClientError;
use solana_program::pubkey::Pubkey;

/// Failures of a call against the counter program.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// The counter account has not been created yet.
    #[error("counter account {0} does not exist")]
    AccountNotFound(Pubkey),

    #[error("account {address} does not hold a counter: {reason}")]
    InvalidAccountData { address: Pubkey, reason: String },

    #[error("rpc call failed: {0}")]
    Rpc(#[from] ClientError),

    /// The program refused the instruction.
    #[error("transaction rejected: {0}")]
    Rejected(String),
}

impl CounterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CounterError::AccountNotFound(_))
    }
}
