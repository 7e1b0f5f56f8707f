use super::*;
use mhs_entities as e;

impl From<e::activity::Activity> for Activity {
    fn from(from: e::activity::Activity) -> Self {
        let e::activity::Activity {
            name: _,
            description,
            schedule,
            max_participants,
            participants,
        } = from;
        Self {
            description,
            schedule,
            max_participants,
            participants: participants.into_iter().map(String::from).collect(),
        }
    }
}

impl FromIterator<e::activity::Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = e::activity::Activity>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|a| (a.name.to_string(), Activity::from(a)))
                .collect(),
        )
    }
}

impl From<Vec<e::activity::Activity>> for Activities {
    fn from(from: Vec<e::activity::Activity>) -> Self {
        from.into_iter().collect()
    }
}
