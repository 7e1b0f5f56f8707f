use super::json_error_response;
use mhs_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("Missing query parameter: {0}")]
    MissingQueryParameter(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        UsecaseError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => match err {
                UsecaseError::ActivityNotFound | UsecaseError::Repo(RepoError::NotFound) => {
                    json_error_response(req, &UsecaseError::ActivityNotFound, Status::NotFound)
                }
                UsecaseError::AlreadySignedUp | UsecaseError::NotRegistered => {
                    json_error_response(req, &err, Status::BadRequest)
                }
                _ => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
            },
            Error::MissingQueryParameter(_) => {
                json_error_response(req, &self, Status::UnprocessableEntity)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
