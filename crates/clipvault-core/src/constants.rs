//! Fixed product limits.
//!
//! These match what the web client enforces on its side and are not
//! operator-tunable; the upload caps live in [`crate::config`] instead.

/// Length of a server-generated password.
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

/// Inclusive word-count bounds for the profile biography.
pub const BIO_WORD_BOUNDS: (usize, usize) = (1, 500);

/// Inclusive word-count bounds for a video title.
pub const TITLE_WORD_BOUNDS: (usize, usize) = (1, 30);

/// Inclusive word-count bounds for a video description.
pub const DESCRIPTION_WORD_BOUNDS: (usize, usize) = (1, 120);
