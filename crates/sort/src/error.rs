use thiserror::Error;

/// Failures caused by how a sort call was provisioned. The input values themselves can never make
/// a sort fail.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("run stack overflow: more than {capacity} pending runs")]
    RunStackOverflow { capacity: usize },
    #[error("scratch buffer too short: need {required} elements, got {actual}")]
    ScratchTooShort { required: usize, actual: usize },
    #[error("invalid sort parameters: {0}")]
    InvalidParams(&'static str),
}
