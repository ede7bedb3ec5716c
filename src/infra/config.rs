//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Solana RPC URL (required).
///
/// `ANCHOR_PROVIDER_URL` is accepted as well so an `anchor test` style environment works unchanged.
pub fn solana_rpc_url() -> anyhow::Result<String> {
    resolve_rpc_url(var("SOLANA_RPC_URL"), var("ANCHOR_PROVIDER_URL"))
}

pub(crate) fn resolve_rpc_url(
    solana: Option<String>,
    anchor: Option<String>,
) -> anyhow::Result<String> {
    solana
        .or(anchor)
        .ok_or_else(|| anyhow!("SOLANA_RPC_URL must be set"))
}

/// Counter program id (required).
///
/// Set this to the Program ID you deployed (e.g. output of `anchor deploy`).
pub fn solana_program_id() -> anyhow::Result<Pubkey> {
    resolve_program_id(var("SOLANA_PROGRAM_ID"))
}

pub(crate) fn resolve_program_id(raw: Option<String>) -> anyhow::Result<Pubkey> {
    let raw = raw.ok_or_else(|| anyhow!("SOLANA_PROGRAM_ID must be set"))?;
    parse_program_id(&raw)
}

pub(crate) fn parse_program_id(raw: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(raw.trim())
        .with_context(|| format!("SOLANA_PROGRAM_ID is not a valid pubkey: {}", raw))
}

/// Path of the caller keypair, tilde expanded.
pub fn keypair_path() -> PathBuf {
    resolve_keypair_path(var("SOLANA_KEYPAIR_PATH"), var("ANCHOR_WALLET"))
}

pub(crate) fn resolve_keypair_path(solana: Option<String>, anchor: Option<String>) -> PathBuf {
    let raw = solana
        .or(anchor)
        .unwrap_or_else(|| DEFAULT_KEYPAIR_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Commitment used for reads and transaction confirmation. Defaults to `confirmed`.
pub fn commitment() -> anyhow::Result<CommitmentConfig> {
    match var("SOLANA_COMMITMENT") {
        None => Ok(CommitmentConfig::confirmed()),
        Some(level) => parse_commitment(&level),
    }
}

pub(crate) fn parse_commitment(level: &str) -> anyhow::Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(anyhow!(
            "SOLANA_COMMITMENT must be one of processed|confirmed|finalized, got '{}'",
            other
        )),
    }
}

/// Everything needed to talk to the counter program.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub keypair_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ClientConfig {
    /// Loads `.env` (if present) and reads the configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            rpc_url: solana_rpc_url()?,
            program_id: solana_program_id()?,
            keypair_path: keypair_path(),
            commitment: commitment()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::commitment_config::CommitmentLevel;

    #[test]
    fn parses_known_commitment_levels() {
        assert_eq!(
            parse_commitment("Finalized").unwrap().commitment,
            CommitmentLevel::Finalized
        );
        assert_eq!(
            parse_commitment(" processed ").unwrap().commitment,
            CommitmentLevel::Processed
        );
        assert!(parse_commitment("max").is_err());
    }

    #[test]
    fn rpc_url_falls_back_to_anchor_provider() {
        let url = resolve_rpc_url(None, Some("http://127.0.0.1:8899".to_string())).unwrap();
        assert_eq!(url, "http://127.0.0.1:8899");

        let url = resolve_rpc_url(
            Some("https://api.devnet.solana.com".to_string()),
            Some("http://127.0.0.1:8899".to_string()),
        )
        .unwrap();
        assert_eq!(url, "https://api.devnet.solana.com");
    }

    #[test]
    fn missing_rpc_url_is_an_error() {
        let err = resolve_rpc_url(None, None).unwrap_err();
        assert!(err.to_string().contains("SOLANA_RPC_URL must be set"));
    }

    #[test]
    fn parses_program_id() {
        let id = Pubkey::new_unique();
        assert_eq!(parse_program_id(&format!(" {} ", id)).unwrap(), id);
    }

    #[test]
    fn missing_program_id_is_an_error() {
        let err = resolve_program_id(None).unwrap_err();
        assert!(err.to_string().contains("SOLANA_PROGRAM_ID must be set"));
    }

    #[test]
    fn malformed_program_id_is_an_error() {
        let err = parse_program_id("not-a-pubkey").unwrap_err();
        assert!(format!("{:#}", err).contains("SOLANA_PROGRAM_ID is not a valid pubkey: not-a-pubkey"));
    }

    #[test]
    fn keypair_path_defaults_and_falls_back() {
        let anchor = resolve_keypair_path(None, Some("/tmp/wallet.json".to_string()));
        assert_eq!(anchor, PathBuf::from("/tmp/wallet.json"));

        let explicit = resolve_keypair_path(
            Some("/etc/id.json".to_string()),
            Some("/tmp/wallet.json".to_string()),
        );
        assert_eq!(explicit, PathBuf::from("/etc/id.json"));

        let default = resolve_keypair_path(None, None);
        assert!(default.ends_with(".config/solana/id.json"));
    }
}
