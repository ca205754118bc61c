use crate::auth::identity::VerificationError;
use crate::players::models::Player;
use crate::rounds::models::RoundView;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodePasscodeResponse {
    pub error: bool,
    pub player_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasscodeExtractionError {
    pub error: bool,
    pub reason: PasscodeExtractionReason,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasscodeExtractionReason {
    NoPasscodeHeaderProvided,
    InvalidPasscode,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdentityResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<VerificationErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    /// First round, started right away for a freshly verified player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
}

impl VerifyIdentityResponse {
    pub fn failure(error_code: VerificationErrorCode) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            passcode: None,
            player: None,
            round: None,
        }
    }

    pub fn success(passcode: String, player: Player, round: Option<RoundView>) -> Self {
        Self {
            error: false,
            error_code: None,
            passcode: Some(passcode),
            player: Some(player),
            round,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationErrorCode {
    Rejected,
    Unverified,
    AgeRequirementNotMet,
    ProviderFailure,
    StorageUnavailable,
    PasscodeNotIssued,
}

impl From<&VerificationError> for VerificationErrorCode {
    fn from(error: &VerificationError) -> Self {
        match error {
            VerificationError::Rejected => VerificationErrorCode::Rejected,
            VerificationError::Unverified => VerificationErrorCode::Unverified,
            VerificationError::AgeRequirementNotMet(_) => {
                VerificationErrorCode::AgeRequirementNotMet
            }
            VerificationError::Provider(_) => VerificationErrorCode::ProviderFailure,
        }
    }
}
