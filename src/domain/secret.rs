//! Secret record domain types.
//!
//! A [`SecretRecord`] is the immutable input to conversion: a type tag, an
//! optional mapping of field names to base64-text values, and pass-through
//! credential metadata (scope, id, description). Records are conventionally
//! sourced from structured key/value secret documents.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Visibility scope of the resulting credential within the host system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialScope {
    /// Available everywhere in the host system.
    #[default]
    Global,
    /// Restricted to the host system itself.
    System,
}

impl CredentialScope {
    /// Returns the string representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::System => "system",
        }
    }
}

impl FromStr for CredentialScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown credential scope: {}", s)),
        }
    }
}

impl fmt::Display for CredentialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An externally supplied secret record, read-only input to conversion.
///
/// The data mapping values are the stored base64 text, kept as raw bytes so
/// decoding failures surface through the converter's error taxonomy rather
/// than at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretRecord {
    #[serde(rename = "type")]
    secret_type: String,
    #[serde(default)]
    data: Option<HashMap<String, Vec<u8>>>,
    #[serde(default)]
    scope: CredentialScope,
    id: String,
    #[serde(default)]
    description: String,
}

impl SecretRecord {
    /// Creates a record with the given type tag and credential id, no data.
    pub fn new(secret_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            secret_type: secret_type.into(),
            data: None,
            scope: CredentialScope::default(),
            id: id.into(),
            description: String::new(),
        }
    }

    /// Sets the data mapping.
    pub fn with_data(mut self, data: HashMap<String, Vec<u8>>) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the credential scope.
    pub fn with_scope(mut self, scope: CredentialScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the credential description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The record's type tag (e.g. `"certificate"`).
    pub fn secret_type(&self) -> &str {
        &self.secret_type
    }

    /// The data mapping, if the record carries one.
    pub fn data(&self) -> Option<&HashMap<String, Vec<u8>>> {
        self.data.as_ref()
    }

    /// Scope of the resulting credential.
    pub fn scope(&self) -> CredentialScope {
        self.scope
    }

    /// Identifier of the resulting credential.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description of the resulting credential.
    pub fn description(&self) -> &str {
        &self.description
    }
}
