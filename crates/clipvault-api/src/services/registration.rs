//! Account provisioning.
//!
//! Registration generates the password server-side and delivers it by mail;
//! the request never carries one. The mail send happens after the row is
//! committed, so a relay failure surfaces as an error while the account
//! still exists.

use std::sync::Arc;

use serde::Deserialize;

use clipvault_core::password::{generate_password, hash_password};
use clipvault_core::validation::validate_registration;
use clipvault_core::{AppError, models::NewUser, models::User};
use clipvault_db::UserRepositoryTrait;

use crate::services::mailer::{registration_mail, Mailer};
use crate::state::AppState;

/// Registration payload. Fields default to empty strings so a missing field
/// reports a per-field validation message instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

pub struct RegistrationService {
    users: Arc<dyn UserRepositoryTrait>,
    mailer: Arc<dyn Mailer>,
    bcrypt_cost: u32,
    frontend_url: String,
}

impl RegistrationService {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: state.users.clone(),
            mailer: state.mailer.clone(),
            bcrypt_cost: state.config.bcrypt_cost,
            frontend_url: state.config.frontend_url.clone(),
        }
    }

    /// Validate the request, create the account with a generated password,
    /// and mail the credentials to the new user.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        let errors = validate_registration(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.phone_number,
        );
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict);
        }

        let password = generate_password(
            &request.first_name,
            &request.last_name,
            &request.phone_number,
        );
        let password_hash = hash_password(&password, self.bcrypt_cost)?;

        let user = self
            .users
            .insert(NewUser {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone_number: request.phone_number,
                password_hash,
            })
            .await?;

        let (subject, body) = registration_mail(&user, &password, &self.frontend_url);
        self.mailer.send(&user.email, &subject, &body).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}
