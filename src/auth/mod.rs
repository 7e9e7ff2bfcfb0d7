//! HTTP Basic authentication for mutating item routes.
//!
//! Handlers opt in by taking an [`Admin`] argument; the extractor rejects the
//! request with [`AppError::Unauthorized`] before the handler body runs.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::{error::AppError, AppState};

/// The single administrator account allowed to mutate items.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Both fields are compared in constant time and both are always checked.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AppError> {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self
            .password
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes());

        if bool::from(user_ok & pass_ok) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Proof that the request carried valid administrator credentials.
#[derive(Debug, Clone, Copy)]
pub struct Admin;

#[async_trait]
impl FromRequestParts<AppState> for Admin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();
        let TypedHeader(Authorization(basic)) = parts
            .extract::<TypedHeader<Authorization<Basic>>>()
            .await
            .map_err(|_| {
                warn!(%path, "Missing or malformed credentials");
                AppError::Unauthorized
            })?;

        state
            .credentials
            .authenticate(basic.username(), basic.password())
            .map_err(|err| {
                warn!(%path, username = %basic.username(), "Rejected credentials");
                err
            })?;

        Ok(Admin)
    }
}
