use mhs_core::{entities::Directory, repositories as repo};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{Ref, RefCell, RefMut},
    sync::Arc,
};

mod repo_impl;

type SharedDirectory = Arc<RwLock<Directory>>;

/// Read access to the directory.
///
/// Any number of read-only handles can exist at the same time.
pub struct DbReadOnly<'a> {
    directory: RwLockReadGuard<'a, Directory>,
}

impl<'a> DbReadOnly<'a> {
    fn new(directory: &'a SharedDirectory) -> Self {
        Self {
            directory: directory.read(),
        }
    }
}

/// Exclusive access to the directory.
///
/// The write lock is held until the handle is dropped, so a
/// use case that checks and then modifies the directory
/// runs as a single critical section.
pub struct DbReadWrite<'a> {
    directory: RefCell<RwLockWriteGuard<'a, Directory>>,
}

impl<'a> DbReadWrite<'a> {
    fn new(directory: &'a SharedDirectory) -> Self {
        Self {
            directory: RefCell::new(directory.write()),
        }
    }

    fn directory(&self) -> Ref<'_, RwLockWriteGuard<'a, Directory>> {
        self.directory.borrow()
    }

    fn directory_mut(&self) -> RefMut<'_, RwLockWriteGuard<'a, Directory>> {
        self.directory.borrow_mut()
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    // All request handlers share the same directory.
    // Readers are served concurrently, a writer waits
    // until it is the only one.
    directory: SharedDirectory,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly::new(&self.directory)
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(&self.directory)
    }
}

impl From<Directory> for Connections {
    fn from(directory: Directory) -> Self {
        log::debug!("Sharing directory with {} activities", directory.len());
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}

fn read_only_error() -> repo::Error {
    repo::Error::Other(anyhow::anyhow!(
        "Modifying the directory requires exclusive access"
    ))
}
