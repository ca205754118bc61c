use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PasscodePayload {
    pub player_id: String,
}

#[derive(Debug, Error)]
pub enum PasscodeError {
    #[error("the signing key is unusable")]
    InvalidKey,

    #[error("failed to sign the passcode: {0}")]
    Signing(jwt::Error),

    #[error("the passcode is malformed or its signature doesn't match")]
    Invalid,
}

/// HMAC-SHA256 key passcodes are signed and checked with. Constructed once at
/// startup and handed around in the app context.
#[derive(Clone)]
pub struct PasscodeKey(Hmac<Sha256>);

impl PasscodeKey {
    pub fn new(secret: &str) -> Result<Self, PasscodeError> {
        Hmac::new_from_slice(secret.as_bytes())
            .map(Self)
            .map_err(|_| PasscodeError::InvalidKey)
    }

    pub fn issue(&self, player_id: &str) -> Result<String, PasscodeError> {
        PasscodePayload {
            player_id: player_id.to_string(),
        }
        .sign_with_key(&self.0)
        .map_err(PasscodeError::Signing)
    }

    pub fn decode(&self, passcode: &str) -> Result<PasscodePayload, PasscodeError> {
        passcode
            .verify_with_key(&self.0)
            .map_err(|_err| PasscodeError::Invalid)
    }
}
