// Responsible for all communication with the Solana blockchain.

use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{
    signature::Signature,
    signer::{
        keypair::{read_keypair_file, Keypair},
        Signer,
    },
    transaction::Transaction,
};
use tracing::{debug, info};

use super::instructions;
use crate::domain::counter::{CounterAccount, CounterError, CounterProgram};
use crate::infra::config::ClientConfig;

/// `CounterProgram` backed by a JSON-RPC endpoint and a keypair file.
pub struct RpcCounterProgram {
    client: RpcClient,
    payer: Keypair,
    program_id: Pubkey,
}

impl RpcCounterProgram {
    /// Reads the payer keypair and builds the RPC client. No network traffic happens here.
    pub fn connect(config: &ClientConfig) -> anyhow::Result<Self> {
        let payer = read_keypair_file(&config.keypair_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read keypair file {}: {}",
                config.keypair_path.display(),
                e
            )
        })?;

        debug!(rpc_url = %config.rpc_url, program_id = %config.program_id, "connecting");
        let client = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

        Ok(Self {
            client,
            payer,
            program_id: config.program_id,
        })
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.client
    }

    async fn send(&self, instruction: Instruction) -> Result<Signature, CounterError> {
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&self.payer.pubkey()));

        let recent_blockhash = self.client.get_latest_blockhash().await?;
        transaction.sign(&[&self.payer], recent_blockhash);

        let signature = self
            .client
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(classify)?;
        info!(%signature, "transaction confirmed");
        Ok(signature)
    }
}

// A transaction error means the program (or runtime) refused the call; anything else is transport.
fn classify(err: ClientError) -> CounterError {
    match err.get_transaction_error() {
        Some(tx_err) => CounterError::Rejected(tx_err.to_string()),
        None => CounterError::Rpc(err),
    }
}

#[async_trait]
impl CounterProgram for RpcCounterProgram {
    fn identity(&self) -> Pubkey {
        self.payer.pubkey()
    }

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    async fn balance(&self) -> Result<u64, CounterError> {
        Ok(self.client.get_balance(&self.payer.pubkey()).await?)
    }

    async fn fetch_counter(&self, address: &Pubkey) -> Result<CounterAccount, CounterError> {
        let account = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await?
            .value
            .ok_or(CounterError::AccountNotFound(*address))?;

        if account.owner != self.program_id {
            return Err(CounterError::InvalidAccountData {
                address: *address,
                reason: format!("owned by {}, not the counter program", account.owner),
            });
        }
        CounterAccount::try_from_account_data(address, &account.data)
    }

    async fn initialize(&self, address: &Pubkey) -> Result<Signature, CounterError> {
        debug!(counter = %address, "sending initialize");
        let ix = instructions::initialize(&self.program_id, address, &self.payer.pubkey());
        self.send(ix).await
    }

    async fn increment(&self, address: &Pubkey) -> Result<Signature, CounterError> {
        debug!(counter = %address, "sending increment");
        let ix = instructions::increment(&self.program_id, address, &self.payer.pubkey());
        self.send(ix).await
    }
}
