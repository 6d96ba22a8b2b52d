//! Input validation utilities

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{self, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Lowercase words separated by single hyphens
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Slugs that collide with fixed route segments
const RESERVED_SLUGS: &[&str] = &["mine"];

/// Validate a hackathon url slug
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let len = slug.len() as u64;
    if len < constants::MIN_HACKATHON_URL_LENGTH || len > constants::MAX_HACKATHON_URL_LENGTH {
        return Err(ValidationError::new("slug_length").with_message(Cow::Owned(format!(
            "Url must be {}-{} characters",
            constants::MIN_HACKATHON_URL_LENGTH,
            constants::MAX_HACKATHON_URL_LENGTH
        ))));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(ValidationError::new("slug_format").with_message(Cow::Borrowed(
            "Url can only contain lowercase letters, numbers, and single hyphens",
        )));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(ValidationError::new("slug_reserved")
            .with_message(Cow::Borrowed("This url is reserved")));
    }
    Ok(())
}

/// Validate a role identifier
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err(ValidationError::new("role").with_message(Cow::Borrowed("Unknown role")))
    }
}

/// Reject strings that are empty once trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("Must not be blank")))
    } else {
        Ok(())
    }
}

/// Normalize pagination parameters to a 1-based page and a bounded page size
pub fn page_params(page: Option<u32>, per_page: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    (page, per_page)
}

/// Row offset of a 1-based page, computed wide enough for any `u32` input
pub fn page_offset(page: u32, per_page: u32) -> i64 {
    (i64::from(page.max(1)) - 1) * i64::from(per_page)
}
