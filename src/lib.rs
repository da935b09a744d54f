pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod profile;
pub mod terminal;
pub mod ui;

pub use crate::core::form_data;
pub use crate::core::form_engine;
pub use crate::core::form_event;
pub use crate::core::navigation;
pub use crate::core::validation;

pub use input::phone;
pub use input::validators;

pub use config::FormConfig;
pub use crate::core::{
    ErrorSet, FieldName, FocusTarget, FormController, FormData, Submission, TextField,
};
pub use error::FormError;
pub use profile::ProfileRecord;
