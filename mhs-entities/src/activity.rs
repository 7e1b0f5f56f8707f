use std::{borrow::Borrow, fmt};

use crate::student::StudentEmail;

/// Name of an activity.
///
/// The name is the public key of an activity. It is case and
/// whitespace sensitive and never normalized.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ActivityName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl From<String> for ActivityName {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ActivityName {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ActivityName> for String {
    fn from(from: ActivityName) -> Self {
        from.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extracurricular offering and its roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: ActivityName,
    pub description: String,
    pub schedule: String,
    /// Advisory capacity, never checked against the roster.
    pub max_participants: u32,
    /// Enrolled students in sign-up order.
    pub participants: Vec<StudentEmail>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == email)
    }

    pub fn add_participant(&mut self, email: StudentEmail) {
        debug_assert!(!self.has_participant(email.as_str()));
        self.participants.push(email);
    }

    /// Removes the participant and returns it, if present.
    pub fn remove_participant(&mut self, email: &str) -> Option<StudentEmail> {
        let pos = self.participants.iter().position(|p| p.as_str() == email)?;
        Some(self.participants.remove(pos))
    }

    /// Returns the first participant that occurs more than once.
    pub fn duplicate_participant(&self) -> Option<&StudentEmail> {
        self.participants
            .iter()
            .enumerate()
            .find(|(i, p)| self.participants[..*i].contains(p))
            .map(|(_, p)| p)
    }
}
