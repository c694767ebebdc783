//! Client-visible response messages.
//!
//! The web client matches several of these strings verbatim (some drive UI
//! transitions, e.g. the "Closing popup ..." ones), so they must only change
//! together with the frontend.

pub const UNEXPECTED_ERROR: &str = "Some unexpected error occurred. Please try again.";
pub const USER_ALREADY_EXISTS: &str = "User already exists. Please login using credentials.";
pub const USER_NOT_FOUND: &str = "User not found. Be sure that you provide correct credentials.";
pub const USER_REGISTRATION_SUCCESSFUL: &str =
    "User registered successfully. A mail containing login link has been sent to your id.";
pub const INCORRECT_PASSWORD: &str = "Oops, that's an incorrect password.";
pub const VALIDATION_ERROR: &str = "Validation error.";
pub const LOGIN_SUCCESSFUL: &str = "Login successful. Redirecting you to dashboard ...";
pub const UNAUTHORIZED: &str = "Unauthorized access.";
pub const USER_FETCH_SUCCESSFUL: &str = "User data fetched successfully.";
pub const USERS_FETCH_SUCCESSFUL: &str = "Users fetched successfully.";
pub const VIDEOS_FETCH_SUCCESSFUL: &str = "Videos fetched successfully.";
pub const BIO_ADDED: &str = "User bio added successfully. Closing popup ...";
pub const VIDEO_FILE_MISSING: &str = "Video file is missing.";
pub const INVALID_FILE_TYPE: &str = "Invalid file type.";
pub const FILE_SIZE_EXCEEDED: &str = "File size exceeded.";
pub const VIDEO_UPLOADED: &str = "Video uploaded successfully. Closing popup ...";

// Field-level validation messages
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_MOBILE_NUMBER: &str = "Mobile number should contain 10 digits.";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const INVALID_BIO_LENGTH: &str = "Invalid bio length.";
pub const INVALID_VIDEO_TITLE: &str = "Invalid video title";
pub const INVALID_VIDEO_DESCRIPTION: &str = "Invalid video description";
