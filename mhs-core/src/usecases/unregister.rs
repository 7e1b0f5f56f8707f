use super::{error::activity_not_found, prelude::*, Enrollment};

pub fn unregister_from_activity<R>(
    repo: &R,
    activity: &str,
    email: StudentEmail,
) -> Result<Enrollment>
where
    R: ActivityRepo,
{
    let activity = repo.get_activity(activity).map_err(activity_not_found)?;
    if !activity.has_participant(email.as_str()) {
        log::debug!("{email} is not registered for {}", activity.name);
        return Err(Error::NotRegistered);
    }
    repo.remove_participant(activity.name.as_str(), email.as_str())
        .map_err(|err| match err {
            RepoError::NotFound => Error::NotRegistered,
            err => err.into(),
        })?;
    log::info!("Unregistered {email} from {}", activity.name);
    Ok(Enrollment {
        activity: activity.name,
        email,
    })
}
