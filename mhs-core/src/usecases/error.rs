use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("The activity '{0}' is defined more than once")]
    DuplicateActivity(String),
    #[error("Invalid activity '{0}': {1}")]
    InvalidSeed(String, String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<mhs_entities::directory::DuplicateActivityName> for Error {
    fn from(err: mhs_entities::directory::DuplicateActivityName) -> Self {
        Self::DuplicateActivity(err.0.into())
    }
}

pub(crate) fn activity_not_found(err: repositories::Error) -> Error {
    match err {
        repositories::Error::NotFound => Error::ActivityNotFound,
        err => err.into(),
    }
}
