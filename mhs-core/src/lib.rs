pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use mhs_entities::{activity::*, directory::*, student::*};
}
