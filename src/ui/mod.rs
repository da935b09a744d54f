pub mod form_view;
pub mod span;
pub mod style;
