//! Identity proofs.
//!
//! A player logs in by answering an [`AssertionRequest`] with a proof made by
//! an external credential wallet. This module only defines the contract and a
//! mock provider; the proof system itself lives outside of this server.

use crate::auth::consts::{
    DEFAULT_ISSUING_COUNTRY, FALLBACK_USERNAME, MAX_USERNAME_LENGTH, SUPPORTED_COUNTRIES,
};
use async_trait::async_trait;
use clap::ValueEnum;
use rand::Rng;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

/// What the server asks the holder of a credential to disclose or prove.
#[derive(Clone, Debug, PartialEq)]
pub struct AssertionRequest {
    pub scope: String,
    pub disclose_first_name: bool,
    pub disclose_issuing_country: bool,
    /// Minimum age the holder has to prove, without disclosing the age itself.
    pub min_age: Option<u8>,
    /// Country code picked by the player in the login form. Used when the
    /// proof doesn't disclose the issuing country.
    pub preferred_country: Option<String>,
}

impl AssertionRequest {
    pub fn game_login(preferred_country: Option<String>) -> Self {
        Self {
            scope: String::from("gaming-verification"),
            disclose_first_name: true,
            disclose_issuing_country: true,
            min_age: Some(18),
            preferred_country,
        }
    }
}

/// Answer of the credential provider.
#[derive(Clone, Debug, PartialEq)]
pub struct DisclosureBundle {
    /// Stable per holder and scope; becomes the player ID.
    pub unique_identifier: String,
    pub verified: bool,
    pub first_name: Option<String>,
    pub issuing_country: Option<String>,
    /// Outcome of the minimum-age proof, `None` when none was produced.
    pub age_proof: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    #[error("the holder rejected the request")]
    Rejected,

    #[error("the proof could not be verified")]
    Unverified,

    #[error("the holder did not prove being at least {0} years old")]
    AgeRequirementNotMet(u8),

    #[error("identity provider failure: {0}")]
    Provider(String),
}

/// The identity a verified bundle boils down to.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedIdentity {
    pub player_id: String,
    pub username: String,
    pub nationality: Option<String>,
}

impl DisclosureBundle {
    /// Checks the bundle against what was asked for.
    pub fn into_identity(
        self,
        request: &AssertionRequest,
    ) -> Result<VerifiedIdentity, VerificationError> {
        if !self.verified {
            return Err(VerificationError::Unverified);
        }
        if let Some(min_age) = request.min_age {
            if self.age_proof != Some(true) {
                return Err(VerificationError::AgeRequirementNotMet(min_age));
            }
        }
        let username = self
            .first_name
            .filter(|name| !name.trim().is_empty())
            .map(|name| truncate_graphemes(name.trim(), MAX_USERNAME_LENGTH))
            .unwrap_or_else(|| FALLBACK_USERNAME.to_string());
        let nationality = self
            .issuing_country
            .or_else(|| request.preferred_country.clone())
            .map(|code| country_name(&code));
        Ok(VerifiedIdentity {
            player_id: self.unique_identifier,
            username,
            nationality,
        })
    }
}

/// Display name of a supported ISO 3166-1 alpha-3 code. Anything else is kept
/// as given.
pub fn country_name(code: &str) -> String {
    SUPPORTED_COUNTRIES
        .iter()
        .find(|(known_code, _)| known_code.eq_ignore_ascii_case(code))
        .map_or_else(|| code.to_string(), |(_, name)| name.to_string())
}

fn truncate_graphemes(value: &str, max: usize) -> String {
    value.graphemes(true).take(max).collect()
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, request: &AssertionRequest)
        -> Result<DisclosureBundle, VerificationError>;
}

/// How the mock wallet answers. Selected with `--mock-identity-outcome`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MockOutcome {
    #[default]
    Approve,
    UnderAge,
    Reject,
    Unreachable,
}

/// Stands in for a real credential wallet: answers immediately with a made-up
/// holder.
#[derive(Clone, Debug, Default)]
pub struct MockIdentityVerifier {
    outcome: MockOutcome,
}

impl MockIdentityVerifier {
    pub fn new(outcome: MockOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl IdentityVerifier for MockIdentityVerifier {
    async fn verify(
        &self,
        request: &AssertionRequest,
    ) -> Result<DisclosureBundle, VerificationError> {
        match self.outcome {
            MockOutcome::Reject => return Err(VerificationError::Rejected),
            MockOutcome::Unreachable => {
                return Err(VerificationError::Provider(format!(
                    "no wallet answered the `{}` request",
                    request.scope
                )))
            }
            MockOutcome::Approve | MockOutcome::UnderAge => {}
        }
        let first_name = request
            .disclose_first_name
            .then(|| format!("Player{}", rand::thread_rng().gen_range(0..1000)));
        let issuing_country = request.disclose_issuing_country.then(|| {
            request
                .preferred_country
                .clone()
                .unwrap_or_else(|| DEFAULT_ISSUING_COUNTRY.to_string())
        });
        let age_proof = request
            .min_age
            .map(|_| self.outcome != MockOutcome::UnderAge);
        Ok(DisclosureBundle {
            unique_identifier: format!("mock_{}", Uuid::new_v4()),
            verified: true,
            first_name,
            issuing_country,
            age_proof,
        })
    }
}
