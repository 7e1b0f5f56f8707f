use super::prelude::*;

/// Replaces all activities with the given seed.
///
/// The seed is checked before anything is touched:
/// names must be unique, rosters free of duplicates
/// and every capacity positive.
pub fn load_seed<R>(repo: &R, seed: Vec<Activity>) -> Result<usize>
where
    R: ActivityRepo,
{
    validate_seed(&seed)?;
    let removed = repo.delete_all_activities()?;
    if removed > 0 {
        log::debug!("Removed {removed} activities before seeding");
    }
    let count = seed.len();
    for activity in seed {
        repo.create_activity(activity)?;
    }
    Ok(count)
}

fn validate_seed(seed: &[Activity]) -> Result<()> {
    for (i, activity) in seed.iter().enumerate() {
        if seed[..i].iter().any(|a| a.name == activity.name) {
            return Err(Error::DuplicateActivity(activity.name.to_string()));
        }
        if activity.max_participants == 0 {
            return Err(Error::InvalidSeed(
                activity.name.to_string(),
                "max participants must be positive".into(),
            ));
        }
        if let Some(email) = activity.duplicate_participant() {
            return Err(Error::InvalidSeed(
                activity.name.to_string(),
                format!("{email} is listed more than once"),
            ));
        }
    }
    Ok(())
}
