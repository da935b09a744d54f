use crate::core::FieldName;
use crate::core::navigation::FocusTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ValueChanged {
        field: FieldName,
    },
    InputRejected {
        segment: usize,
        value: String,
    },
    /// The presentation layer should move input focus to `target`.
    FocusRequested {
        target: FocusTarget,
    },
}
