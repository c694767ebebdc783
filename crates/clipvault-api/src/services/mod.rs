//! Application services behind the HTTP handlers.

pub mod mailer;
pub mod registration;
pub mod video_upload;

pub use mailer::{Mailer, SmtpMailer};
pub use registration::{RegisterRequest, RegistrationService};
pub use video_upload::VideoUploadService;
