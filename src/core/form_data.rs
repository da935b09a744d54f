use crate::core::{FieldName, TextField};
use crate::input::phone::{self, PhoneSegments};
use crate::profile::{PhoneValue, ProfileRecord};
use serde::{Deserialize, Serialize};

/// Field values for one form session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub phone: PhoneSegments,
}

impl FormData {
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            first_name: text(&profile.first_name),
            last_name: text(&profile.last_name),
            email: text(&profile.email),
            city: text(&profile.city),
            phone: import_phone(profile.phone.as_ref()),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::City => &self.city,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::City => &mut self.city,
        }
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.phone.get(index).map(String::as_str)
    }

    pub fn canonical_phone(&self) -> String {
        phone::canonical(&self.phone)
    }

    /// The string a validator sees for `field`.
    pub fn value(&self, field: FieldName) -> String {
        match field.text_field() {
            Some(text_field) => self.text(text_field).to_string(),
            None => self.canonical_phone(),
        }
    }
}

fn import_phone(value: Option<&PhoneValue>) -> PhoneSegments {
    let imported = match value {
        None => return PhoneSegments::default(),
        Some(PhoneValue::Flat(raw)) => phone::split_flat(raw),
        Some(PhoneValue::Segments(parts)) => phone::from_parts(parts),
    };
    imported.unwrap_or_else(|| {
        tracing::warn!(?value, "phone value does not fit DD-DD-DD-D, starting empty");
        PhoneSegments::default()
    })
}

#[cfg(test)]
mod tests {
    use super::FormData;
    use crate::core::{FieldName, TextField};
    use crate::profile::{PhoneValue, ProfileRecord};

    #[test]
    fn sample_profile_splits_flat_phone() {
        let data = FormData::from_profile(&ProfileRecord::sample());
        assert_eq!(data.first_name, "Default");
        assert_eq!(data.city, "Hobbiton");
        assert_eq!(data.phone, ["12", "34", "56", "7"].map(String::from));
        assert_eq!(data.value(FieldName::Phone), "12-34-56-7");
    }

    #[test]
    fn segmented_phone_passes_through() {
        let profile = ProfileRecord {
            phone: Some(PhoneValue::Segments(
                ["55", "55", "55", "5"].map(String::from).to_vec(),
            )),
            ..ProfileRecord::default()
        };
        let data = FormData::from_profile(&profile);
        assert_eq!(data.phone, ["55", "55", "55", "5"].map(String::from));
        assert_eq!(data.text(TextField::FirstName), "");
    }

    #[test]
    fn misshapen_phone_degrades_to_empty_segments() {
        for phone in [
            PhoneValue::Flat("123456789".to_string()),
            PhoneValue::Flat("12-34".to_string()),
            PhoneValue::Segments(vec!["12".to_string()]),
        ] {
            let profile = ProfileRecord {
                phone: Some(phone),
                ..ProfileRecord::default()
            };
            let data = FormData::from_profile(&profile);
            assert!(data.phone.iter().all(String::is_empty));
        }
    }

    #[test]
    fn empty_profile_gives_empty_form() {
        assert_eq!(FormData::from_profile(&ProfileRecord::default()), FormData::default());
    }
}
