//! Focus movement between inputs while typing.
//!
//! Each input has a rule: where focus goes when the input is emptied, and
//! where it goes when the input reaches its maximum length. Emptying always
//! wins, so one keystroke never produces both moves.

use crate::config::TextNavigation;
use crate::core::TextField;
use crate::input::phone::{self, SEGMENT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Field(TextField),
    PhoneSegment(usize),
}

/// Tab order of every input on the form.
pub const FOCUS_ORDER: [FocusTarget; 4 + SEGMENT_COUNT] = [
    FocusTarget::Field(TextField::FirstName),
    FocusTarget::Field(TextField::LastName),
    FocusTarget::Field(TextField::Email),
    FocusTarget::Field(TextField::City),
    FocusTarget::PhoneSegment(0),
    FocusTarget::PhoneSegment(1),
    FocusTarget::PhoneSegment(2),
    FocusTarget::PhoneSegment(3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRule {
    pub max_len: Option<usize>,
    pub prev: Option<FocusTarget>,
    pub next: Option<FocusTarget>,
}

impl NavigationRule {
    /// Where focus should go after `value` was written.
    pub fn resolve(&self, value: &str) -> Option<FocusTarget> {
        if value.is_empty() {
            return self.prev;
        }
        match self.max_len {
            Some(max) if value.chars().count() == max => self.next,
            _ => None,
        }
    }
}

struct TextLink {
    field: TextField,
    prev: Option<TextField>,
    next: Option<TextField>,
}

const TEXT_LINKS: [TextLink; 4] = [
    TextLink {
        field: TextField::FirstName,
        prev: None,
        next: Some(TextField::LastName),
    },
    TextLink {
        field: TextField::LastName,
        prev: Some(TextField::FirstName),
        next: Some(TextField::Email),
    },
    TextLink {
        field: TextField::Email,
        prev: Some(TextField::LastName),
        next: Some(TextField::City),
    },
    TextLink {
        field: TextField::City,
        prev: Some(TextField::Email),
        next: None,
    },
];

pub fn phone_rule(index: usize) -> Option<NavigationRule> {
    phone::segment(index).map(|spec| NavigationRule {
        max_len: Some(spec.max_len),
        prev: spec.prev.map(FocusTarget::PhoneSegment),
        next: spec.next.map(FocusTarget::PhoneSegment),
    })
}

/// `None` when text-field navigation is switched off.
pub fn text_rule(field: TextField, settings: &TextNavigation) -> Option<NavigationRule> {
    if !settings.enabled {
        return None;
    }
    TEXT_LINKS
        .iter()
        .find(|link| link.field == field)
        .map(|link| NavigationRule {
            max_len: settings.max_len,
            prev: link.prev.map(FocusTarget::Field),
            next: link.next.map(FocusTarget::Field),
        })
}

/// Tab-order neighbour of `current`, wrapping at both ends.
pub fn cycle(current: FocusTarget, forward: bool) -> FocusTarget {
    let len = FOCUS_ORDER.len();
    let index = FOCUS_ORDER
        .iter()
        .position(|target| *target == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    FOCUS_ORDER[next]
}
