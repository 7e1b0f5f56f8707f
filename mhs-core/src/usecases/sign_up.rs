use super::{error::activity_not_found, prelude::*, Enrollment};

/// Signs a student up for an activity.
///
/// The repo must be an exclusive handle, otherwise two concurrent
/// requests might both pass the duplicate check.
pub fn sign_up_for_activity<R>(repo: &R, activity: &str, email: StudentEmail) -> Result<Enrollment>
where
    R: ActivityRepo,
{
    let activity = repo.get_activity(activity).map_err(activity_not_found)?;
    if activity.has_participant(email.as_str()) {
        log::debug!("{email} already signed up for {}", activity.name);
        return Err(Error::AlreadySignedUp);
    }
    // max_participants is advisory
    repo.add_participant(activity.name.as_str(), email.clone())
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadySignedUp,
            err => activity_not_found(err),
        })?;
    log::info!("Signed up {email} for {}", activity.name);
    Ok(Enrollment {
        activity: activity.name,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn sign_up_new_student() {
        let db = MockDb::seeded();
        let enrollment =
            sign_up_for_activity(&db, "Soccer Team", "new@x.edu".into()).unwrap();
        assert_eq!(enrollment.activity.as_str(), "Soccer Team");
        assert_eq!(enrollment.email.as_str(), "new@x.edu");
        let soccer = db.get_activity("Soccer Team").unwrap();
        assert_eq!(
            soccer.participants,
            vec![
                StudentEmail::from("alex@mergington.edu"),
                StudentEmail::from("chris@mergington.edu"),
                StudentEmail::from("new@x.edu"),
            ]
        );
    }

    #[test]
    fn sign_up_twice() {
        let db = MockDb::seeded();
        let err = sign_up_for_activity(&db, "Soccer Team", "alex@mergington.edu".into())
            .unwrap_err();
        assert!(matches!(err, Error::AlreadySignedUp));
        assert_eq!(err.to_string(), "Student already signed up for this activity");
        assert_eq!(db.get_activity("Soccer Team").unwrap().participants.len(), 2);
    }

    #[test]
    fn sign_up_for_unknown_activity() {
        let db = MockDb::seeded();
        let err = sign_up_for_activity(&db, "soccer team", "new@x.edu".into()).unwrap_err();
        assert!(matches!(err, Error::ActivityNotFound));
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn sign_up_beyond_capacity() {
        let db = MockDb::seeded();
        let max = db.get_activity("Swimming Club").unwrap().max_participants;
        for i in 0..max {
            sign_up_for_activity(&db, "Swimming Club", format!("s{i}@x.edu").into()).unwrap();
        }
        let swimming = db.get_activity("Swimming Club").unwrap();
        assert_eq!(swimming.participants.len(), max as usize + 1);
    }

    #[test]
    fn same_student_in_different_activities() {
        let db = MockDb::seeded();
        sign_up_for_activity(&db, "Drama Club", "alex@mergington.edu".into()).unwrap();
        assert!(db
            .get_activity("Drama Club")
            .unwrap()
            .has_participant("alex@mergington.edu"));
    }
}
