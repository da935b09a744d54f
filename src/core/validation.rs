use crate::core::FieldName;
use crate::core::form_data::FormData;
use crate::input::validators::{self, Validator};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

pub const FIRST_NAME_MESSAGE: &str =
    "First name must be at least 2 characters long and should not contain numbers";
pub const LAST_NAME_MESSAGE: &str =
    "Last name must be at least 2 characters long and should not contain numbers";
pub const EMAIL_MESSAGE: &str = "Email is Invalid";
pub const CITY_MESSAGE: &str = "City is Invalid";
pub const PHONE_MESSAGE: &str = "Invalid Phone Number";

pub struct ValidationRule {
    pub field: FieldName,
    pub validator: Validator,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// One rule per field, in display order.
pub fn default_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule {
            field: FieldName::FirstName,
            validator: validators::custom(validators::is_name_valid, FIRST_NAME_MESSAGE),
        },
        ValidationRule {
            field: FieldName::LastName,
            validator: validators::custom(validators::is_name_valid, LAST_NAME_MESSAGE),
        },
        ValidationRule {
            field: FieldName::Email,
            validator: validators::custom(validators::is_email_valid, EMAIL_MESSAGE),
        },
        ValidationRule {
            field: FieldName::City,
            validator: validators::custom(validators::is_city_valid, CITY_MESSAGE),
        },
        ValidationRule {
            field: FieldName::Phone,
            validator: validators::custom(validators::is_phone_valid, PHONE_MESSAGE),
        },
    ]
}

/// Failed fields from the latest submit, keyed by field in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(IndexMap<FieldName, String>);

impl ErrorSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

/// Run every rule against `data` and collect the failures.
pub fn validate_form(rules: &[ValidationRule], data: &FormData) -> ErrorSet {
    let errors = rules
        .iter()
        .filter_map(|rule| {
            let value = data.value(rule.field);
            (rule.validator)(value.as_str())
                .err()
                .map(|err| (rule.field, err))
        })
        .collect();
    ErrorSet(errors)
}
