//! Bridge construction and decoding errors.
//!
//! Runtime bridge operations never return these; they only surface while building, installing,
//! or configuring the emulator.

use thiserror::Error;

/// Errors raised outside the always-resolving bridge surface.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// [`crate::install`] was called after a bridge was already published.
    #[error("a bridge instance is already installed for this page")]
    AlreadyInstalled,
    /// The JSON configuration could not be parsed.
    #[error("invalid bridge config: {0}")]
    Config(#[from] serde_json::Error),
    /// The init-data query string could not be produced.
    #[error("init data encode failed: {0}")]
    InitDataEncode(String),
    /// The init-data query string could not be decoded.
    #[error("init data decode failed: {0}")]
    InitDataDecode(String),
}
