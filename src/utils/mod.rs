//! Small shared utilities.

pub mod url_validator;
