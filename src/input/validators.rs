use regex::Regex;
use std::sync::LazyLock;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:word:]]+([.-]?[[:word:]]+)*@[[:word:]]+([.-]?[[:word:]]+)*(\.[[:word:]]{2,3})+$")
        .expect("email pattern")
});

static CITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]*$").expect("city pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}-[0-9]$").expect("phone pattern"));

/// First and last names: at least two characters, no digits.
pub fn is_name_valid(value: &str) -> bool {
    value.chars().count() >= 2 && !value.chars().any(|ch| ch.is_ascii_digit())
}

pub fn is_email_valid(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Letters and whitespace only. The empty string passes.
pub fn is_city_valid(value: &str) -> bool {
    CITY_RE.is_match(value)
}

/// Expects the canonical `DD-DD-DD-D` form.
pub fn is_phone_valid(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Wrap a predicate with a fixed failure message.
pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = message.into();
    Box::new(
        move |value: &str| {
            if f(value) { Ok(()) } else { Err(msg.clone()) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_accepts_dashed_local_part() {
        assert!(is_email_valid("bilbo-baggins@adventurehobbits.net"));
        assert!(is_email_valid("default@default.com"));
        assert!(is_email_valid("frodo.baggins@shire.co.uk"));
    }

    #[test]
    fn email_requires_at_and_dotted_suffix() {
        assert!(!is_email_valid("not-an-email"));
        assert!(!is_email_valid("a@b"));
        assert!(!is_email_valid("a@b.c"));
        assert!(!is_email_valid("a..b@shire.net"));
        assert!(!is_email_valid(""));
    }

    #[test]
    fn city_allows_letters_and_spaces() {
        assert!(is_city_valid("Hobbiton"));
        assert!(is_city_valid("Bag End"));
        assert!(is_city_valid(""));
        assert!(!is_city_valid("Hobbit0n"));
        assert!(!is_city_valid("Bree-land"));
    }

    #[test]
    fn phone_matches_canonical_form_only() {
        assert!(is_phone_valid("55-55-55-5"));
        assert!(!is_phone_valid("555-555"));
        assert!(!is_phone_valid("55-55-555"));
        assert!(!is_phone_valid("55-55-55-55"));
        assert!(!is_phone_valid("5555555"));
        assert!(!is_phone_valid(""));
    }

    #[test]
    fn custom_validator_reports_fixed_message() {
        let name = custom(is_name_valid, "bad name");
        let short = custom(|value| value.len() < 5, "too long");
        assert_eq!(name("Sam"), Ok(()));
        assert_eq!(name("S"), Err("bad name".to_string()));
        assert_eq!(short("Samwise"), Err("too long".to_string()));
    }

    proptest! {
        #[test]
        fn name_with_digit_is_rejected(value in "[a-zA-Z ]{0,6}[0-9][a-zA-Z0-9 ]{0,6}") {
            prop_assert!(!is_name_valid(&value));
        }

        #[test]
        fn short_name_is_rejected(value in "[^0-9]?") {
            prop_assert!(!is_name_valid(&value));
        }

        #[test]
        fn long_enough_name_without_digits_is_accepted(value in "[^0-9]{2,16}") {
            prop_assert!(is_name_valid(&value));
        }
    }
}
