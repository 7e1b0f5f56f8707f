use std::{borrow::Borrow, fmt};

/// The e-mail address a student signs up with.
///
/// The address is taken as given: neither the format nor the
/// domain is checked.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StudentEmail(String);

impl StudentEmail {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StudentEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for StudentEmail {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl From<String> for StudentEmail {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for StudentEmail {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<StudentEmail> for String {
    fn from(from: StudentEmail) -> Self {
        from.0
    }
}

impl fmt::Display for StudentEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
