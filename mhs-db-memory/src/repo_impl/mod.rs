use super::*;
use mhs_core::{entities::*, repositories::ActivityRepo};

type Result<T> = std::result::Result<T, repo::Error>;

fn all_activities(dir: &Directory) -> Vec<Activity> {
    dir.iter().cloned().collect()
}

fn get_activity(dir: &Directory, name: &str) -> Result<Activity> {
    dir.get(name).cloned().ok_or(repo::Error::NotFound)
}

impl<'a> ActivityRepo for DbReadOnly<'a> {
    fn all_activities(&self) -> Result<Vec<Activity>> {
        Ok(all_activities(&self.directory))
    }

    fn get_activity(&self, name: &str) -> Result<Activity> {
        get_activity(&self.directory, name)
    }

    fn count_activities(&self) -> Result<usize> {
        Ok(self.directory.len())
    }

    fn create_activity(&self, _: Activity) -> Result<()> {
        Err(read_only_error())
    }

    fn delete_all_activities(&self) -> Result<usize> {
        Err(read_only_error())
    }

    fn add_participant(&self, _: &str, _: StudentEmail) -> Result<()> {
        Err(read_only_error())
    }

    fn remove_participant(&self, _: &str, _: &str) -> Result<()> {
        Err(read_only_error())
    }
}

impl<'a> ActivityRepo for DbReadWrite<'a> {
    fn all_activities(&self) -> Result<Vec<Activity>> {
        Ok(all_activities(&self.directory()))
    }

    fn get_activity(&self, name: &str) -> Result<Activity> {
        get_activity(&self.directory(), name)
    }

    fn count_activities(&self) -> Result<usize> {
        Ok(self.directory().len())
    }

    fn create_activity(&self, activity: Activity) -> Result<()> {
        self.directory_mut().try_insert(activity).map_err(|err| {
            log::warn!("{err}");
            repo::Error::AlreadyExists
        })
    }

    fn delete_all_activities(&self) -> Result<usize> {
        let mut dir = self.directory_mut();
        let count = dir.len();
        dir.clear();
        Ok(count)
    }

    fn add_participant(&self, activity: &str, email: StudentEmail) -> Result<()> {
        let mut dir = self.directory_mut();
        let activity = dir.get_mut(activity).ok_or(repo::Error::NotFound)?;
        if activity.has_participant(email.as_str()) {
            return Err(repo::Error::AlreadyExists);
        }
        activity.add_participant(email);
        Ok(())
    }

    fn remove_participant(&self, activity: &str, email: &str) -> Result<()> {
        let mut dir = self.directory_mut();
        let activity = dir.get_mut(activity).ok_or(repo::Error::NotFound)?;
        activity
            .remove_participant(email)
            .map(|_| ())
            .ok_or(repo::Error::NotFound)
    }
}
