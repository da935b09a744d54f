pub mod form_data;
pub mod form_engine;
pub mod form_event;
pub mod navigation;
pub mod validation;

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use form_data::FormData;
pub use form_engine::{FormController, FormPhase, Submission};
pub use form_event::FormEvent;
pub use navigation::FocusTarget;
pub use validation::ErrorSet;

/// The four free-text inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    City,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::Email,
        TextField::City,
    ];

    pub fn as_str(self) -> &'static str {
        FieldName::from(self).as_str()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::City => "City",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Bilbo",
            Self::LastName => "Baggins",
            Self::Email => "bilbo-baggins@adventurehobbits.net",
            Self::City => "Hobbiton",
        }
    }
}

/// Every validated field. Keys of [`ErrorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    City,
    Phone,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::City,
        FieldName::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::City => "city",
            Self::Phone => "phone",
        }
    }

    pub fn text_field(self) -> Option<TextField> {
        match self {
            Self::FirstName => Some(TextField::FirstName),
            Self::LastName => Some(TextField::LastName),
            Self::Email => Some(TextField::Email),
            Self::City => Some(TextField::City),
            Self::Phone => None,
        }
    }
}

impl From<TextField> for FieldName {
    fn from(value: TextField) -> Self {
        match value {
            TextField::FirstName => Self::FirstName,
            TextField::LastName => Self::LastName,
            TextField::Email => Self::Email,
            TextField::City => Self::City,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parses a wire name such as `"firstName"`.
impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// String entry point for `FormController::update_field` callers that
/// carry the wire name instead of the enum.
impl FromStr for TextField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<FieldName>()?
            .text_field()
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
