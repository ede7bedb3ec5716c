//! Regression checks against a freshly created counter.
//!
//! The checks share one remote account and must run in order: initialize (0),
//! increment once (1), increment three more times (4).

use solana_program::pubkey::Pubkey;
use tracing::info;

use crate::domain::counter::{CounterAccount, CounterError, CounterProgram};

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("check '{check}' failed: expected {field} = {expected}, observed {observed}")]
    Mismatch {
        check: &'static str,
        field: &'static str,
        expected: String,
        observed: String,
    },

    /// The checks assume a counter that does not exist yet.
    #[error("counter {0} is already initialized; verification needs a fresh account")]
    AlreadyInitialized(Pubkey),

    #[error(transparent)]
    Remote(#[from] CounterError),
}

pub const CHECK_INITIALIZE: &str = "initialize";
pub const CHECK_INCREMENT_ONCE: &str = "increment once";
pub const CHECK_INCREMENT_THREE: &str = "increment three times";

fn expect_count(
    check: &'static str,
    account: &CounterAccount,
    expected: u64,
) -> Result<(), VerificationError> {
    if account.count != expected {
        return Err(VerificationError::Mismatch {
            check,
            field: "count",
            expected: expected.to_string(),
            observed: account.count.to_string(),
        });
    }
    Ok(())
}

/// Drives the ordered checks against one program handle.
pub struct VerificationRunner<'a, P: CounterProgram + ?Sized> {
    program: &'a P,
    address: Pubkey,
}

impl<'a, P: CounterProgram + ?Sized> VerificationRunner<'a, P> {
    pub fn new(program: &'a P) -> Self {
        Self {
            address: program.counter_address(),
            program,
        }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    /// Fails with `AlreadyInitialized` unless the counter is absent.
    pub async fn ensure_fresh(&self) -> Result<(), VerificationError> {
        match self.program.fetch_counter(&self.address).await {
            Ok(_) => Err(VerificationError::AlreadyInitialized(self.address)),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check 1: a new counter starts at zero and belongs to the caller.
    pub async fn check_initialize(&self) -> Result<CounterAccount, VerificationError> {
        let signature = self.program.initialize(&self.address).await?;
        info!(%signature, "initialize sent");

        let account = self.program.fetch_counter(&self.address).await?;
        expect_count(CHECK_INITIALIZE, &account, 0)?;

        let identity = self.program.identity();
        if account.authority != identity {
            return Err(VerificationError::Mismatch {
                check: CHECK_INITIALIZE,
                field: "authority",
                expected: identity.to_string(),
                observed: account.authority.to_string(),
            });
        }
        Ok(account)
    }

    /// Check 2: one increment moves the counter to one.
    pub async fn check_increment_once(&self) -> Result<CounterAccount, VerificationError> {
        let signature = self.program.increment(&self.address).await?;
        info!(%signature, "increment sent");

        let account = self.program.fetch_counter(&self.address).await?;
        expect_count(CHECK_INCREMENT_ONCE, &account, 1)?;
        Ok(account)
    }

    /// Check 3: three further increments, issued back to back, land on four.
    pub async fn check_increment_three(&self) -> Result<CounterAccount, VerificationError> {
        for _ in 0..3 {
            let signature = self.program.increment(&self.address).await?;
            info!(%signature, "increment sent");
        }

        let account = self.program.fetch_counter(&self.address).await?;
        expect_count(CHECK_INCREMENT_THREE, &account, 4)?;
        Ok(account)
    }

    /// Runs every check in order, stopping at the first failure.
    ///
    /// Returns the names of the checks that passed.
    pub async fn run_all(&self) -> Result<Vec<&'static str>, VerificationError> {
        self.run_all_reporting(|_| {}).await
    }

    /// Like `run_all`, but calls `on_pass` as soon as each check succeeds, so checks
    /// that passed before a failure are still reported.
    pub async fn run_all_reporting<F>(
        &self,
        mut on_pass: F,
    ) -> Result<Vec<&'static str>, VerificationError>
    where
        F: FnMut(&'static str),
    {
        self.ensure_fresh().await?;

        let mut passed = Vec::with_capacity(3);
        self.check_initialize().await?;
        on_pass(CHECK_INITIALIZE);
        passed.push(CHECK_INITIALIZE);

        self.check_increment_once().await?;
        on_pass(CHECK_INCREMENT_ONCE);
        passed.push(CHECK_INCREMENT_ONCE);

        self.check_increment_three().await?;
        on_pass(CHECK_INCREMENT_THREE);
        passed.push(CHECK_INCREMENT_THREE);
        Ok(passed)
    }
}
