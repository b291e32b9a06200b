use crate::modules::activities::adapters::outbound::activity_store::ActivityStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error("{0}")]
    Domain(String),
}
