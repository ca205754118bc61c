use crate::geo::catalog::GameMode;
use crate::geo::models::{LatLng, Location};
use crate::geo::scoring::RoundResult;
use serde::Serialize;
use thiserror::Error;

/// One selection-guess-score cycle of a single player.
#[derive(Clone, Debug, Default)]
pub struct Round {
    pub mode: GameMode,
    pub state: RoundState,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RoundState {
    /// No verified player yet, hence no target.
    #[default]
    AwaitingAuth,
    RoundActive {
        target: Location,
    },
    /// The guess may still be moved until it is submitted.
    GuessPlaced {
        target: Location,
        guess: LatLng,
    },
    /// Frozen until the next round is started.
    Resolved(ResolvedRound),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRound {
    pub target: Location,
    pub guess: LatLng,
    pub result: RoundResult,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// The round has just been scored; the result must be persisted.
    Scored(ResolvedRound),
    /// The round had already been scored; nothing changed.
    AlreadyResolved(ResolvedRound),
}

impl Submission {
    pub fn resolved(&self) -> &ResolvedRound {
        match self {
            Submission::Scored(resolved) | Submission::AlreadyResolved(resolved) => resolved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("there is no round in progress")]
    NoActiveRound,

    #[error("no guess was placed before submitting")]
    NoGuessPlaced,

    #[error("the round is already resolved")]
    AlreadyResolved,
}

impl Round {
    /// Starts a new round, dropping whatever state the previous one was in.
    /// An unresolved previous round is abandoned without being scored.
    pub fn start(&mut self, mode: GameMode, target: Location) {
        self.mode = mode;
        self.state = RoundState::RoundActive { target };
    }

    pub fn place_guess(&mut self, guess: LatLng) -> Result<(), RoundError> {
        let target = match &self.state {
            RoundState::AwaitingAuth => return Err(RoundError::NoActiveRound),
            RoundState::Resolved(_) => return Err(RoundError::AlreadyResolved),
            RoundState::RoundActive { target } | RoundState::GuessPlaced { target, .. } => {
                target.clone()
            }
        };
        self.state = RoundState::GuessPlaced { target, guess };
        Ok(())
    }

    /// Scores the round. `guess`, when given, replaces the staged one. Calling
    /// this again on a resolved round returns the frozen result untouched.
    pub fn submit(&mut self, guess: Option<LatLng>) -> Result<Submission, RoundError> {
        let (target, guess) = match (&self.state, guess) {
            (RoundState::AwaitingAuth, _) => return Err(RoundError::NoActiveRound),
            (RoundState::Resolved(resolved), _) => {
                return Ok(Submission::AlreadyResolved(resolved.clone()))
            }
            (RoundState::RoundActive { .. }, None) => return Err(RoundError::NoGuessPlaced),
            (RoundState::RoundActive { target }, Some(guess)) => (target.clone(), guess),
            (RoundState::GuessPlaced { target, guess }, None) => (target.clone(), *guess),
            (RoundState::GuessPlaced { target, .. }, Some(guess)) => (target.clone(), guess),
        };
        let resolved = ResolvedRound {
            result: RoundResult::of_guess(guess, target.position),
            target,
            guess,
        };
        self.state = RoundState::Resolved(resolved.clone());
        Ok(Submission::Scored(resolved))
    }

    pub fn view(&self) -> RoundView {
        let (status, target, guess, result) = match &self.state {
            RoundState::AwaitingAuth => (RoundStatus::AwaitingAuth, None, None, None),
            RoundState::RoundActive { target } => {
                (RoundStatus::RoundActive, Some(target), None, None)
            }
            RoundState::GuessPlaced { target, guess } => {
                (RoundStatus::GuessPlaced, Some(target), Some(*guess), None)
            }
            RoundState::Resolved(resolved) => (
                RoundStatus::Resolved,
                Some(&resolved.target),
                Some(resolved.guess),
                Some(resolved.result),
            ),
        };
        RoundView {
            mode: self.mode,
            status,
            prompt: target.map(|target| target.name.clone()),
            hint: target.and_then(|target| target.hint.clone()),
            guess,
            result,
            // The answer is only revealed once the round is scored.
            target: match status {
                RoundStatus::Resolved => target.cloned(),
                _ => None,
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    AwaitingAuth,
    RoundActive,
    GuessPlaced,
    Resolved,
}

/// What a player is allowed to see of their round.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub mode: GameMode,
    pub status: RoundStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Location>,
}
