use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::validate_identifier;
use crate::domain::AppError;

/// A validated solution identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - Does not start with `.` and carries no path separators
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolutionId(String);

impl SolutionId {
    /// Validate and create a new instance.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_identifier(id, true) && !id.starts_with('.') {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidSolutionId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for SolutionId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SolutionId {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for SolutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SolutionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<SolutionId> for String {
    fn from(val: SolutionId) -> Self {
        val.0
    }
}

impl Serialize for SolutionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SolutionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SolutionId::new(&s).map_err(serde::de::Error::custom)
    }
}
