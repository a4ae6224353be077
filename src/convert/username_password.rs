//! Converter for `usernamePassword` secrets.

use super::SecretConverter;
use crate::domain::{Credential, SecretRecord, UsernamePasswordCredential};
use crate::errors::Result;
use crate::secrets::accessor;
use crate::secrets::SecretString;

/// Converts a `usernamePassword` secret record into a
/// [`UsernamePasswordCredential`].
///
/// Requires base64-encoded UTF-8 `username` and `password` entries. Same
/// short-circuit discipline as the certificate converter: data presence,
/// username presence and decode, then password presence and decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernamePasswordConverter;

impl SecretConverter for UsernamePasswordConverter {
    fn can_convert(&self, secret_type: &str) -> bool {
        secret_type == "usernamePassword"
    }

    fn convert(&self, secret: &SecretRecord) -> Result<Credential> {
        accessor::require_data(secret, "usernamePassword definition contains no data")?;

        let username_base64 = accessor::get_non_null_data(
            secret,
            "username",
            "usernamePassword credential is missing the username",
        )?;
        let username = accessor::base64_decode_to_string(
            username_base64,
            "usernamePassword credential has an invalid username (must be base64 encoded UTF-8)",
        )?;

        let password_base64 = accessor::get_non_null_data(
            secret,
            "password",
            "usernamePassword credential is missing the password",
        )?;
        let password = accessor::base64_decode_to_string(
            password_base64,
            "usernamePassword credential has an invalid password (must be base64 encoded UTF-8)",
        )?;

        Ok(Credential::UsernamePassword(UsernamePasswordCredential::new(
            secret.scope(),
            secret.id(),
            secret.description(),
            username,
            SecretString::new(password),
        )))
    }
}
