use crate::error::{Error, Result};
use blake2::{Blake2b512, Digest};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const KEY_LEN: usize = 32;

const DOMAIN_TAG: &[u8] = b"phrasegen/seed/v1";

/// Derives a keystream key from one or more seed phrases.
///
/// Phrases are trimmed and NFC-normalized, then chained: each step hashes
/// the previous key together with the next phrase. Order matters.
pub fn derive_seed<S: AsRef<str>>(phrases: &[S]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if phrases.is_empty() {
        return Err(Error::EmptySeed);
    }

    let mut current_key = Zeroizing::new([0u8; KEY_LEN]);

    for (i, phrase) in phrases.iter().enumerate() {
        let normalized: Zeroizing<String> = Zeroizing::new(phrase.as_ref().trim().nfc().collect());
        if normalized.is_empty() {
            return Err(Error::EmptySeed);
        }

        let mut hasher = Blake2b512::new();
        if i == 0 {
            hasher.update(DOMAIN_TAG);
        } else {
            hasher.update(&current_key[..]);
        }
        hasher.update((normalized.len() as u64).to_le_bytes());
        hasher.update(normalized.as_bytes());

        let digest = Zeroizing::new(hasher.finalize().to_vec());
        current_key.copy_from_slice(&digest[..KEY_LEN]);
    }

    tracing::debug!(layers = phrases.len(), "derived keystream seed");

    Ok(current_key)
}
