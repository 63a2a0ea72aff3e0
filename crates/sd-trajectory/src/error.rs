use sd_agent::AgentError;
use sd_core::{LandmarkId, SdError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("generator configuration error: {0}")]
    Config(String),

    #[error("agent model failed its sensing precondition: {0}")]
    Precondition(AgentError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("no episode reached full landmark coverage within {limit} episodes")]
    EpisodeLimit { limit: u64 },

    #[error("episode {episode}, step {step}: move rejected {limit} times in a row")]
    MoveRetryLimit {
        limit:   u64,
        episode: u64,
        step:    usize,
    },

    #[error("episode {episode}, step {step}: measurement of {landmark} outside 0..{num_landmarks}")]
    UnknownLandmark {
        landmark:      LandmarkId,
        num_landmarks: usize,
        episode:       u64,
        step:          usize,
    },
}

impl From<SdError> for GenerateError {
    fn from(e: SdError) -> Self {
        match e {
            SdError::Config(msg) => GenerateError::Config(msg),
        }
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;
