//! Validation modules

pub mod upload;

pub use upload::{
    validate_arn, validate_project_arn, MAX_CONTENT_TYPE_LENGTH, MAX_NAME_LENGTH,
    MIN_NAME_LENGTH,
};
