pub mod phone;
pub mod validators;

pub use phone::{PHONE_SEGMENTS, PhoneSegments, SEGMENT_COUNT, SegmentSpec};
pub use validators::{Validator, ValidationError};
