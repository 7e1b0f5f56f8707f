// Low-level storage access traits.
// A repository only loads and stores entities, the business
// rules are checked by the use cases.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ActivityRepo {
    /// All activities in directory order.
    fn all_activities(&self) -> Result<Vec<Activity>>;
    fn get_activity(&self, name: &str) -> Result<Activity>;
    fn count_activities(&self) -> Result<usize>;

    fn create_activity(&self, activity: Activity) -> Result<()>;
    fn delete_all_activities(&self) -> Result<usize>;

    /// Appends the participant to the roster of the activity.
    fn add_participant(&self, activity: &str, email: StudentEmail) -> Result<()>;
    fn remove_participant(&self, activity: &str, email: &str) -> Result<()>;
}
