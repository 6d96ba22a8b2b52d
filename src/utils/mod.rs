//! Utility functions

pub mod validation;

pub use validation::{page_offset, page_params, validate_not_blank, validate_role, validate_slug};
