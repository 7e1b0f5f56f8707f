use super::prelude::*;
use mhs_entities::builders::*;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub activities: RefCell<Directory>,
}

impl MockDb {
    pub fn seeded() -> Self {
        let activities = vec![
            Activity::build()
                .name("Soccer Team")
                .description("Join the school soccer team and compete in regional tournaments")
                .schedule("Tuesdays and Thursdays, 4:00 PM - 6:00 PM")
                .max_participants(25)
                .participants(vec!["alex@mergington.edu", "chris@mergington.edu"])
                .finish(),
            Activity::build()
                .name("Swimming Club")
                .description("Improve your swimming technique and participate in swim meets")
                .schedule("Mondays and Wednesdays, 3:00 PM - 4:30 PM")
                .max_participants(15)
                .participants(vec!["sarah@mergington.edu"])
                .finish(),
            Activity::build()
                .name("Drama Club")
                .description("Perform in school plays and develop acting skills")
                .schedule("Wednesdays, 3:30 PM - 5:30 PM")
                .max_participants(20)
                .participants(vec!["lily@mergington.edu", "james@mergington.edu"])
                .finish(),
        ];
        Self {
            activities: RefCell::new(Directory::try_from(activities).unwrap()),
        }
    }
}

impl ActivityRepo for MockDb {
    fn all_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.borrow().iter().cloned().collect())
    }

    fn get_activity(&self, name: &str) -> RepoResult<Activity> {
        self.activities
            .borrow()
            .get(name)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn count_activities(&self) -> RepoResult<usize> {
        Ok(self.activities.borrow().len())
    }

    fn create_activity(&self, activity: Activity) -> RepoResult<()> {
        self.activities
            .borrow_mut()
            .try_insert(activity)
            .map_err(|_| RepoError::AlreadyExists)
    }

    fn delete_all_activities(&self) -> RepoResult<usize> {
        let mut activities = self.activities.borrow_mut();
        let count = activities.len();
        activities.clear();
        Ok(count)
    }

    fn add_participant(&self, activity: &str, email: StudentEmail) -> RepoResult<()> {
        let mut activities = self.activities.borrow_mut();
        let activity = activities.get_mut(activity).ok_or(RepoError::NotFound)?;
        if activity.has_participant(email.as_str()) {
            return Err(RepoError::AlreadyExists);
        }
        activity.add_participant(email);
        Ok(())
    }

    fn remove_participant(&self, activity: &str, email: &str) -> RepoResult<()> {
        self.activities
            .borrow_mut()
            .get_mut(activity)
            .ok_or(RepoError::NotFound)?
            .remove_participant(email)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[test]
fn list_seeded_activities() {
    let db = MockDb::seeded();
    let activities = super::list_activities(&db).unwrap();
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].name.as_str(), "Soccer Team");
    assert_eq!(activities[0].max_participants, 25);
    assert_eq!(
        activities[2].participants,
        vec![
            StudentEmail::from("lily@mergington.edu"),
            StudentEmail::from("james@mergington.edu")
        ]
    );
}

#[test]
fn list_empty_directory() {
    let db = MockDb::default();
    assert!(super::list_activities(&db).unwrap().is_empty());
}
