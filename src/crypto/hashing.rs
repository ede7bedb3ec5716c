// Anchor discriminators: the first 8 bytes of a namespaced sha256.

use sha2::{Digest, Sha256};

pub type Discriminator = [u8; 8];

// Namespaces Anchor uses when hashing instruction and account names.
const INSTRUCTION_NAMESPACE: &str = "global";
const ACCOUNT_NAMESPACE: &str = "account";

fn sighash(namespace: &str, name: &str) -> Discriminator {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();

    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Discriminator prefixed to the instruction data of `name` (snake_case method name).
pub fn instruction_discriminator(name: &str) -> Discriminator {
    sighash(INSTRUCTION_NAMESPACE, name)
}

/// Discriminator stored at the start of every account of type `name` (CamelCase struct name).
pub fn account_discriminator(name: &str) -> Discriminator {
    sighash(ACCOUNT_NAMESPACE, name)
}
