//! In-memory stand-in for the counter program.
//!
//! Accounts are kept in their encoded form so every read goes through the same decoder as RPC reads.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use counter_client::{counter_address, CounterAccount, CounterError, CounterProgram};
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;

pub const STARTING_BALANCE: u64 = 2_000_000_000;

#[derive(Default)]
struct Ledger {
    accounts: HashMap<Pubkey, Vec<u8>>,
    calls: Vec<&'static str>,
}

pub struct InMemoryProgram {
    program_id: Pubkey,
    identity: Pubkey,
    balance: u64,
    /// Amount added per increment; anything but 1 simulates a broken program.
    step: u64,
    /// Authority written by `initialize`; `None` records the caller.
    recorded_authority: Option<Pubkey>,
    ledger: Mutex<Ledger>,
}

impl InMemoryProgram {
    pub fn new() -> Self {
        Self {
            program_id: Pubkey::new_unique(),
            identity: Pubkey::new_unique(),
            balance: STARTING_BALANCE,
            step: 1,
            recorded_authority: None,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    pub fn with_recorded_authority(mut self, authority: Pubkey) -> Self {
        self.recorded_authority = Some(authority);
        self
    }

    /// Stores raw account data at `address`, bypassing the program rules.
    pub fn put_account(&self, address: Pubkey, data: Vec<u8>) {
        self.ledger.lock().unwrap().accounts.insert(address, data);
    }

    /// Names of the state-changing calls issued so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.ledger.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl CounterProgram for InMemoryProgram {
    fn identity(&self) -> Pubkey {
        self.identity
    }

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    async fn balance(&self) -> Result<u64, CounterError> {
        Ok(self.balance)
    }

    async fn fetch_counter(&self, address: &Pubkey) -> Result<CounterAccount, CounterError> {
        let ledger = self.ledger.lock().unwrap();
        let data = ledger
            .accounts
            .get(address)
            .ok_or(CounterError::AccountNotFound(*address))?;
        CounterAccount::try_from_account_data(address, data)
    }

    async fn initialize(&self, address: &Pubkey) -> Result<Signature, CounterError> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.calls.push("initialize");

        if *address != counter_address(&self.program_id, &self.identity).0 {
            return Err(CounterError::Rejected("seeds constraint violated".to_string()));
        }
        if ledger.accounts.contains_key(address) {
            return Err(CounterError::Rejected(format!(
                "account {} already in use",
                address
            )));
        }

        let account = CounterAccount {
            count: 0,
            authority: self.recorded_authority.unwrap_or(self.identity),
        };
        ledger.accounts.insert(*address, account.to_account_data());
        Ok(Signature::new_unique())
    }

    async fn increment(&self, address: &Pubkey) -> Result<Signature, CounterError> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.calls.push("increment");

        let data = ledger
            .accounts
            .get(address)
            .ok_or_else(|| CounterError::Rejected("account not initialized".to_string()))?;
        let mut account = CounterAccount::try_from_account_data(address, data)?;
        if account.authority != self.identity {
            return Err(CounterError::Rejected("authority mismatch".to_string()));
        }

        account.count += self.step;
        ledger.accounts.insert(*address, account.to_account_data());
        Ok(Signature::new_unique())
    }
}
