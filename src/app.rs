use crate::core::navigation::{self, FOCUS_ORDER, FocusTarget};
use crate::core::{FormController, FormEvent};
use crate::terminal::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Accepted,
    Rejected,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Form submitted successfully!",
            Self::Rejected => "Error Detected",
        }
    }
}

/// Keyboard front end for a [`FormController`]. Owns the focus position and
/// turns keystrokes into whole-value edits.
#[derive(Debug)]
pub struct App {
    form: FormController,
    focus: FocusTarget,
    notice: Option<Notice>,
    should_exit: bool,
}

impl App {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            focus: FOCUS_ORDER[0],
            notice: None,
            should_exit: false,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.ctrl => self.should_exit = true,
            KeyCode::Char('r') if key.ctrl => self.clear(),
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Tab => self.focus = navigation::cycle(self.focus, true),
            KeyCode::BackTab => self.focus = navigation::cycle(self.focus, false),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) if !key.ctrl => self.edit_focused(|value| value.push(ch)),
            KeyCode::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            _ => {}
        }
    }

    fn submit(&mut self) {
        self.notice = Some(if self.form.submit().is_accepted() {
            Notice::Accepted
        } else {
            Notice::Rejected
        });
    }

    fn clear(&mut self) {
        self.form.reset();
        self.focus = FOCUS_ORDER[0];
        self.notice = None;
    }

    fn focused_value(&self) -> &str {
        match self.focus {
            FocusTarget::Field(field) => self.form.data().text(field),
            FocusTarget::PhoneSegment(index) => self.form.data().segment(index).unwrap_or(""),
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self.focused_value().to_string();
        edit(&mut value);

        let events = match self.focus {
            FocusTarget::Field(field) => self.form.update_field(field, value),
            FocusTarget::PhoneSegment(index) => self.form.update_phone_segment(index, &value),
        };

        for event in events {
            match event {
                FormEvent::FocusRequested { target } => self.focus = target,
                FormEvent::ValueChanged { .. } => self.notice = None,
                FormEvent::InputRejected { .. } => {}
            }
        }
    }
}
