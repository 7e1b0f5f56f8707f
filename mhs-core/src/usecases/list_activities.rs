use super::prelude::*;

pub fn list_activities<R>(repo: &R) -> Result<Vec<Activity>>
where
    R: ActivityRepo,
{
    Ok(repo.all_activities()?)
}
