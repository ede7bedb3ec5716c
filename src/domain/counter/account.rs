// Client-side view of the on-chain `Counter` account.

use solana_program::pubkey::Pubkey;

use super::error::CounterError;
use crate::crypto::hashing::{account_discriminator, Discriminator};

/// Name of the account type inside the counter program.
pub const COUNTER_ACCOUNT_NAME: &str = "Counter";

// Account structure: 8-byte discriminator + 8-byte count + 32-byte authority
const DISCRIMINATOR_LEN: usize = 8;
const COUNT_END: usize = DISCRIMINATOR_LEN + 8;
const AUTHORITY_END: usize = COUNT_END + 32;

/// Serialized size of a counter account.
pub const COUNTER_ACCOUNT_LEN: usize = AUTHORITY_END;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAccount {
    pub count: u64,
    pub authority: Pubkey,
}

impl CounterAccount {
    pub fn discriminator() -> Discriminator {
        account_discriminator(COUNTER_ACCOUNT_NAME)
    }

    /// Decodes raw account data fetched from `address`.
    pub fn try_from_account_data(address: &Pubkey, data: &[u8]) -> Result<Self, CounterError> {
        let invalid = |reason: String| CounterError::InvalidAccountData {
            address: *address,
            reason,
        };

        if data.len() < COUNTER_ACCOUNT_LEN {
            return Err(invalid(format!(
                "expected at least {} bytes, got {}",
                COUNTER_ACCOUNT_LEN,
                data.len()
            )));
        }
        if data[..DISCRIMINATOR_LEN] != Self::discriminator() {
            return Err(invalid("account discriminator mismatch".to_string()));
        }

        let mut count_bytes = [0u8; 8];
        count_bytes.copy_from_slice(&data[DISCRIMINATOR_LEN..COUNT_END]);
        let mut authority_bytes = [0u8; 32];
        authority_bytes.copy_from_slice(&data[COUNT_END..AUTHORITY_END]);

        Ok(Self {
            count: u64::from_le_bytes(count_bytes),
            authority: Pubkey::new_from_array(authority_bytes),
        })
    }

    /// Encodes the account the way the program stores it.
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(COUNTER_ACCOUNT_LEN);
        data.extend_from_slice(&Self::discriminator());
        data.extend_from_slice(&self.count.to_le_bytes());
        data.extend_from_slice(self.authority.as_ref());
        data
    }
}
