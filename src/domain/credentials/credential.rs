use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Service a credential belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialType {
    AzureOpenAi,
    Custom(String),
}

/// API key plus the named parameters needed to reach a service
#[derive(Clone)]
pub struct Credential {
    credential_type: CredentialType,
    api_key: String,
    additional_params: HashMap<String, String>,
}

impl Credential {
    pub fn new(credential_type: CredentialType, api_key: String) -> Self {
        Self {
            credential_type,
            api_key,
            additional_params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_params.insert(key.into(), value.into());
        self
    }

    pub fn credential_type(&self) -> &CredentialType {
        &self.credential_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn get_param(&self, key: &str) -> Option<&String> {
        self.additional_params.get(key)
    }

    /// A parameter that must be present and non-empty
    pub fn require_param(&self, key: &str) -> Result<&str, DomainError> {
        self.get_param(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                DomainError::credential(format!(
                    "Missing '{}' for credential type: {}",
                    key, self.credential_type
                ))
            })
    }

    pub fn additional_params(&self) -> &HashMap<String, String> {
        &self.additional_params
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("api_key", &"***")
            .field("additional_params", &self.additional_params)
            .finish()
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialType::AzureOpenAi => write!(f, "azure_openai"),
            CredentialType::Custom(name) => write!(f, "custom:{}", name),
        }
    }
}
