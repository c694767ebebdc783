//! Validation rules: pure predicates over trimmed input, plus the
//! request-level validators built from them. Each validator returns one
//! [`FieldError`] per failing field; an empty list means the input passed.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::constants::{BIO_WORD_BOUNDS, DESCRIPTION_WORD_BOUNDS, TITLE_WORD_BOUNDS};
use crate::error::FieldError;
use crate::messages;

// Indian mobile numbers: optional +91/91/0 prefix, then ten digits with a
// 6-9 lead.
static MOBILE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?91|0)?[6-9]\d{9}$").expect("Invalid mobile number regex"));

/// Number of space-separated tokens in `text`; the empty string counts zero.
///
/// Splitting is strictly on single spaces, so a run of whitespace produces
/// empty tokens that still count: `"a  b"` is three words, not two. The web
/// client counts the same way, so this quirk is load-bearing.
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.split(' ').count()
}

/// Inclusive word-count check over trimmed input.
pub fn word_count_within(text: &str, (min, max): (usize, usize)) -> bool {
    let words = count_words(text.trim());
    words >= min && words <= max
}

pub fn is_valid_email(email: &str) -> bool {
    email.trim().validate_email()
}

pub fn is_valid_mobile_number(phone_number: &str) -> bool {
    MOBILE_NUMBER_RE.is_match(phone_number.trim())
}

/// Validate a registration payload.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone_number: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", messages::FIRST_NAME_REQUIRED));
    }
    if last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", messages::LAST_NAME_REQUIRED));
    }
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", messages::INVALID_EMAIL));
    }
    if !is_valid_mobile_number(phone_number) {
        errors.push(FieldError::new(
            "phoneNumber",
            messages::INVALID_MOBILE_NUMBER,
        ));
    }
    errors
}

/// Validate a login payload.
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", messages::INVALID_EMAIL));
    }
    if password.trim().is_empty() {
        errors.push(FieldError::new("password", messages::PASSWORD_REQUIRED));
    }
    errors
}

/// Validate a biography update.
pub fn validate_bio(bio: &str) -> Vec<FieldError> {
    if word_count_within(bio, BIO_WORD_BOUNDS) {
        Vec::new()
    } else {
        vec![FieldError::new("bio", messages::INVALID_BIO_LENGTH)]
    }
}

/// Validate the free-text fields of a video upload.
pub fn validate_video_fields(title: &str, description: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !word_count_within(title, TITLE_WORD_BOUNDS) {
        errors.push(FieldError::new("title", messages::INVALID_VIDEO_TITLE));
    }
    if !word_count_within(description, DESCRIPTION_WORD_BOUNDS) {
        errors.push(FieldError::new(
            "description",
            messages::INVALID_VIDEO_DESCRIPTION,
        ));
    }
    errors
}
