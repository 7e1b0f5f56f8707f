use thiserror::Error;

use crate::activity::*;

/// All activities of the school, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    activities: Vec<Activity>,
}

#[derive(Debug, Error)]
#[error("The activity '{0}' already exists")]
pub struct DuplicateActivityName(pub ActivityName);

impl Directory {
    pub const fn new() -> Self {
        Self {
            activities: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name.as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn try_insert(&mut self, activity: Activity) -> Result<(), DuplicateActivityName> {
        if self.get(activity.name.as_str()).is_some() {
            return Err(DuplicateActivityName(activity.name));
        }
        self.activities.push(activity);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.activities.clear();
    }
}

impl IntoIterator for Directory {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}

impl TryFrom<Vec<Activity>> for Directory {
    type Error = DuplicateActivityName;

    fn try_from(from: Vec<Activity>) -> Result<Self, Self::Error> {
        let mut dir = Self::new();
        for activity in from {
            dir.try_insert(activity)?;
        }
        Ok(dir)
    }
}
