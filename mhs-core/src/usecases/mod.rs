mod error;
mod list_activities;
mod load_seed;
mod sign_up;
mod unregister;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, list_activities::*, load_seed::*, sign_up::*, unregister::*};

/// Confirmation of a roster change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: prelude::ActivityName,
    pub email: prelude::StudentEmail,
}

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
