use sd_core::SdError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    #[error("sense called before landmarks were placed")]
    LandmarksNotPlaced,

    #[error("agent has no sensor model")]
    NoSensorModel,

    #[error("landmarks already placed ({0} landmarks); the set is immutable")]
    LandmarksAlreadyPlaced(usize),

    #[error(transparent)]
    Config(#[from] SdError),
}

pub type AgentResult<T> = Result<T, AgentError>;
