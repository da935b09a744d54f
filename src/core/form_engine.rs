use crate::config::FormConfig;
use crate::core::form_data::FormData;
use crate::core::form_event::FormEvent;
use crate::core::navigation::{self, NavigationRule};
use crate::core::validation::{self, ErrorSet, ValidationRule};
use crate::core::{FieldName, TextField};
use crate::input::phone;
use crate::profile::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected(ErrorSet),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    SubmittedValid,
    SubmittedInvalid,
}

/// Owns the state of one form session.
///
/// Edits are applied immediately and never validated inline. Validation
/// runs only on [`FormController::submit`], and its errors are visible
/// until the next accepted edit.
#[derive(Debug)]
pub struct FormController {
    data: FormData,
    errors: ErrorSet,
    submitted: bool,
    rules: Vec<ValidationRule>,
    config: FormConfig,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        Self::from_data(config, FormData::default())
    }

    pub fn with_profile(config: FormConfig, profile: &ProfileRecord) -> Self {
        Self::from_data(config, FormData::from_profile(profile))
    }

    fn from_data(config: FormConfig, data: FormData) -> Self {
        Self {
            data,
            errors: ErrorSet::default(),
            submitted: false,
            rules: validation::default_rules(),
            config,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn canonical_phone(&self) -> String {
        self.data.canonical_phone()
    }

    pub fn phase(&self) -> FormPhase {
        match (self.submitted, self.errors.is_empty()) {
            (false, _) => FormPhase::Editing,
            (true, true) => FormPhase::SubmittedValid,
            (true, false) => FormPhase::SubmittedInvalid,
        }
    }

    /// Errors to show, or `None` while editing.
    pub fn visible_errors(&self) -> Option<&ErrorSet> {
        self.submitted.then_some(&self.errors)
    }

    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) -> Vec<FormEvent> {
        let value = value.into();
        let rule = navigation::text_rule(field, &self.config.text_navigation);
        let mut events = Vec::new();
        if self.data.text(field) != value {
            *self.data.text_mut(field) = value;
            self.submitted = false;
            events.push(FormEvent::ValueChanged {
                field: field.into(),
            });
        }
        push_focus(&mut events, rule, self.data.text(field));
        events
    }

    /// Replace one phone segment. Non-digit input, input longer than the
    /// segment allows, and unknown segments are dropped without a trace in
    /// the form state.
    pub fn update_phone_segment(&mut self, index: usize, value: &str) -> Vec<FormEvent> {
        if !phone::accepts(index, value) {
            tracing::debug!(segment = index, value, "phone keystroke rejected");
            return vec![FormEvent::InputRejected {
                segment: index,
                value: value.to_string(),
            }];
        }

        let mut events = Vec::new();
        if self.data.phone[index] != value {
            self.data.phone[index] = value.to_string();
            self.submitted = false;
            events.push(FormEvent::ValueChanged {
                field: FieldName::Phone,
            });
        }
        push_focus(&mut events, navigation::phone_rule(index), value);
        events
    }

    pub fn submit(&mut self) -> Submission {
        self.submitted = true;
        self.errors = validation::validate_form(&self.rules, &self.data);

        if self.errors.is_empty() {
            tracing::info!("form accepted");
            Submission::Accepted
        } else {
            tracing::info!(
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "form rejected"
            );
            Submission::Rejected(self.errors.clone())
        }
    }

    /// Empty every field and forget the last submit.
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors = ErrorSet::default();
        self.submitted = false;
    }
}

fn push_focus(events: &mut Vec<FormEvent>, rule: Option<NavigationRule>, value: &str) {
    if let Some(target) = rule.and_then(|rule| rule.resolve(value)) {
        tracing::debug!(?target, "focus requested");
        events.push(FormEvent::FocusRequested { target });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextNavigation;
    use crate::core::navigation::FocusTarget;
    use crate::core::validation::FIRST_NAME_MESSAGE;

    fn focus_requests(events: &[FormEvent]) -> Vec<FocusTarget> {
        events
            .iter()
            .filter_map(|event| match event {
                FormEvent::FocusRequested { target } => Some(*target),
                _ => None,
            })
            .collect()
    }

    fn sample_form() -> FormController {
        FormController::with_profile(FormConfig::default(), &ProfileRecord::sample())
    }

    #[test]
    fn non_digit_segment_is_ignored() {
        let mut form = FormController::new(FormConfig::default());
        let events = form.update_phone_segment(0, "ab");
        assert_eq!(form.data().phone, FormData::default().phone);
        assert!(focus_requests(&events).is_empty());
        assert!(matches!(events[..], [FormEvent::InputRejected { segment: 0, .. }]));
    }

    #[test]
    fn overlong_segment_is_ignored() {
        let mut form = FormController::new(FormConfig::default());
        form.update_phone_segment(0, "5");
        let events = form.update_phone_segment(0, "123");
        assert_eq!(form.data().segment(0), Some("5"));
        assert!(focus_requests(&events).is_empty());
    }

    #[test]
    fn out_of_range_segment_is_ignored() {
        let mut form = FormController::new(FormConfig::default());
        let events = form.update_phone_segment(4, "5");
        assert_eq!(form.data(), &FormData::default());
        assert!(matches!(events[..], [FormEvent::InputRejected { segment: 4, .. }]));
    }

    #[test]
    fn full_segment_requests_next() {
        let mut form = FormController::new(FormConfig::default());
        let events = form.update_phone_segment(0, "55");
        assert_eq!(form.data().segment(0), Some("55"));
        assert_eq!(focus_requests(&events), vec![FocusTarget::PhoneSegment(1)]);
    }

    #[test]
    fn cleared_segment_requests_previous() {
        let mut form = FormController::new(FormConfig::default());
        form.update_phone_segment(1, "5");
        let events = form.update_phone_segment(1, "");
        assert_eq!(form.data().segment(1), Some(""));
        assert_eq!(focus_requests(&events), vec![FocusTarget::PhoneSegment(0)]);
    }

    #[test]
    fn last_segment_does_not_advance() {
        let mut form = FormController::new(FormConfig::default());
        let events = form.update_phone_segment(3, "5");
        assert_eq!(form.data().segment(3), Some("5"));
        assert!(focus_requests(&events).is_empty());
        assert!(form.update_phone_segment(3, "55").len() == 1);
        assert_eq!(form.data().segment(3), Some("5"));
    }

    #[test]
    fn sample_profile_is_accepted() {
        let mut form = sample_form();
        assert_eq!(form.submit(), Submission::Accepted);
        assert_eq!(form.phase(), FormPhase::SubmittedValid);
        assert!(form.visible_errors().is_some_and(ErrorSet::is_empty));
    }

    #[test]
    fn short_first_name_is_the_only_error() {
        let mut form = sample_form();
        form.update_field(TextField::FirstName, "B");
        let Submission::Rejected(errors) = form.submit() else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::FirstName), Some(FIRST_NAME_MESSAGE));
        assert_eq!(form.phase(), FormPhase::SubmittedInvalid);
    }

    #[test]
    fn submit_is_idempotent() {
        let mut form = sample_form();
        form.update_field(TextField::Email, "nope");
        let first = form.submit();
        let second = form.submit();
        assert_eq!(first, second);
        assert!(!first.is_accepted());

        let mut valid = sample_form();
        assert_eq!(valid.submit(), valid.submit());
    }

    #[test]
    fn errors_hidden_until_submit_and_after_edits() {
        let mut form = FormController::new(FormConfig::default());
        assert!(!form.submitted());
        assert_eq!(form.visible_errors(), None);

        form.submit();
        assert!(form.visible_errors().is_some_and(|errors| !errors.is_empty()));

        form.update_field(TextField::City, "Bree");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.visible_errors(), None);
        assert!(!form.errors().is_empty());
    }

    #[test]
    fn rejected_keystroke_keeps_errors_visible() {
        let mut form = FormController::new(FormConfig::default());
        form.submit();
        form.update_phone_segment(2, "x");
        assert!(form.submitted());
    }

    #[test]
    fn unchanged_value_keeps_errors_visible() {
        let mut form = FormController::new(FormConfig::default());
        form.submit();

        let events = form.update_field(TextField::FirstName, "");
        assert!(events.is_empty());
        assert!(form.submitted());
        assert!(form.visible_errors().is_some());

        form.update_phone_segment(0, "5");
        form.submit();
        let events = form.update_phone_segment(0, "5");
        assert!(events.is_empty());
        assert_eq!(form.phase(), FormPhase::SubmittedInvalid);
    }

    #[test]
    fn unchanged_empty_segment_still_moves_back() {
        let mut form = FormController::new(FormConfig::default());
        form.submit();
        let events = form.update_phone_segment(2, "");
        assert_eq!(
            events,
            vec![FormEvent::FocusRequested {
                target: FocusTarget::PhoneSegment(1),
            }]
        );
        assert!(form.submitted());
    }

    #[test]
    fn error_set_is_rebuilt_on_each_submit() {
        let mut form = FormController::new(FormConfig::default());
        form.submit();
        assert!(form.errors().contains(FieldName::Email));

        for (index, value) in ["55", "55", "55", "5"].into_iter().enumerate() {
            form.update_phone_segment(index, value);
        }
        form.update_field(TextField::FirstName, "Bilbo");
        form.update_field(TextField::LastName, "Baggins");
        form.update_field(TextField::Email, "bilbo-baggins@adventurehobbits.net");
        assert_eq!(form.canonical_phone(), "55-55-55-5");
        assert_eq!(form.submit(), Submission::Accepted);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn text_fields_stay_put_by_default() {
        let mut form = FormController::new(FormConfig::default());
        form.update_field(TextField::LastName, "Took");
        let events = form.update_field(TextField::LastName, "");
        assert_eq!(
            events,
            vec![FormEvent::ValueChanged {
                field: FieldName::LastName,
            }]
        );
    }

    #[test]
    fn text_navigation_when_enabled() {
        let config = FormConfig {
            text_navigation: TextNavigation {
                enabled: true,
                max_len: Some(4),
            },
            ..FormConfig::default()
        };
        let mut form = FormController::new(config);
        let back = form.update_field(TextField::LastName, "");
        assert_eq!(
            focus_requests(&back),
            vec![FocusTarget::Field(TextField::FirstName)]
        );
        let forward = form.update_field(TextField::Email, "a@bc");
        assert_eq!(focus_requests(&forward), vec![FocusTarget::Field(TextField::City)]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = sample_form();
        form.update_field(TextField::FirstName, "B");
        form.submit();
        form.reset();
        assert_eq!(form.data(), &FormData::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
