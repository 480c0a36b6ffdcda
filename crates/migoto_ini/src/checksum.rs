//! Tamper-evident checksum stamping.
//!
//! [`sign`] appends a trailer line carrying the SHA-256 of everything above it:
//!
//! ```text
//! ; SHA256 CHECKSUM: 401cafcfdb224c5013802b3dd5a5442df5f082404a9a1fed91b0f8650d604370
//! ```
//!
//! [`is_modified`] recomputes that hash for a previously written file, which lets
//! callers refuse to overwrite a file that was edited by hand. A missing or
//! garbled trailer is reported as "not modified" so first-time generation and
//! hand-authored files never block a regenerate. What to do with a `true`
//! result (warn, skip, abort) is the caller's decision.

use sha2::{Digest, Sha256};

/// Literal prefix of the trailer line.
pub const CHECKSUM_PREFIX: &str = "; SHA256 CHECKSUM: ";

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Append the checksum trailer for `text` exactly as given.
pub fn sign(text: &str) -> String {
    let checksum = sha256_hex(text);
    let mut signed = String::with_capacity(text.len() + CHECKSUM_PREFIX.len() + checksum.len() + 1);
    signed.push_str(text);
    signed.push_str(CHECKSUM_PREFIX);
    signed.push_str(&checksum);
    signed.push('\n');
    signed
}

/// Extract the claimed checksum from a trailer line, ignoring surrounding whitespace.
pub fn extract_checksum(line: &str) -> Option<&str> {
    line.trim().strip_prefix(CHECKSUM_PREFIX)
}

/// Check whether a file diverges from what was signed.
///
/// `lines` are the file's lines with their terminators preserved, as read from
/// disk. The last line is taken as the trailer; if there is none, or it lacks
/// the expected prefix, the file is treated as not modified.
pub fn is_modified<S: AsRef<str>>(lines: &[S]) -> bool {
    let Some((trailer, content)) = lines.split_last() else {
        tracing::debug!("No lines to verify, treating as unmodified");
        return false;
    };

    let Some(claimed) = extract_checksum(trailer.as_ref()) else {
        tracing::debug!("No checksum trailer found, treating as unmodified");
        return false;
    };

    let mut hasher = Sha256::new();
    for line in content {
        hasher.update(line.as_ref().as_bytes());
    }
    let actual = hex::encode(hasher.finalize());

    if actual != claimed {
        tracing::warn!(
            "Checksum mismatch: trailer claims {} but content hashes to {}",
            claimed,
            actual
        );
        return true;
    }

    false
}

/// [`is_modified`] over whole file contents, split after every `\n`.
pub fn is_text_modified(text: &str) -> bool {
    let lines = text.split_inclusive('\n').collect::<Vec<_>>();
    is_modified(&lines)
}
