//! URL-fragment share codec for generated games.
//!
//! A game travels as `#game=<base64>` where the payload is the standard
//! padded base64 of the game's UTF-8 JSON. The fragment never reaches a
//! server; whoever holds the link holds the game.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::model::GameData;

/// Marker the encoded payload sits behind.
pub const FRAGMENT_PREFIX: &str = "game=";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("fragment does not start with \"game=\"")]
    MissingPrefix,
    #[error("fragment payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("fragment payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("fragment payload is not a game: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a game as a shareable URL fragment, leading `#` included.
pub fn encode_fragment(data: &GameData) -> Result<String, ShareError> {
    let json = serde_json::to_string(data)?;
    Ok(format!("#{FRAGMENT_PREFIX}{}", STANDARD.encode(json)))
}

/// Decode a fragment produced by [`encode_fragment`].
///
/// The leading `#` is optional so both raw fragments and values lifted
/// straight out of a URL parse.
pub fn decode_fragment(fragment: &str) -> Result<GameData, ShareError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let encoded = fragment
        .strip_prefix(FRAGMENT_PREFIX)
        .ok_or(ShareError::MissingPrefix)?;
    let bytes = STANDARD.decode(encoded)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
