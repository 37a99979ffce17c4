use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::domain::DomainError;
use crate::domain::credentials::{Credential, CredentialProvider, CredentialType};
use crate::infrastructure::llm::{API_VERSION_PARAM, DEPLOYMENT_PARAM, ENDPOINT_PARAM};

/// Environment variable mappings for each credential type
#[derive(Debug, Clone)]
pub struct EnvMapping {
    pub api_key_var: String,
    pub additional_vars: HashMap<String, String>,
}

impl EnvMapping {
    pub fn new(api_key_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            additional_vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, param_name: impl Into<String>, env_var: impl Into<String>) -> Self {
        self.additional_vars.insert(param_name.into(), env_var.into());
        self
    }
}

/// Read a variable, treating empty values as unset
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Credential provider that reads from environment variables
#[derive(Debug)]
pub struct EnvCredentialProvider {
    mappings: HashMap<CredentialType, EnvMapping>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn with_mapping(mut self, credential_type: CredentialType, mapping: EnvMapping) -> Self {
        self.mappings.insert(credential_type, mapping);
        self
    }

    pub fn with_defaults(mut self) -> Self {
        self.mappings.insert(
            CredentialType::AzureOpenAi,
            EnvMapping::new("AZURE_OPENAI_API_KEY")
                .with_var(ENDPOINT_PARAM, "AZURE_OPENAI_ENDPOINT")
                .with_var(API_VERSION_PARAM, "AZURE_OPENAI_API_VERSION")
                .with_var(DEPLOYMENT_PARAM, "AZURE_OPENAI_DEPLOYMENT_NAME"),
        );

        self
    }

    fn read_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError> {
        let mapping = self.mappings.get(credential_type).ok_or_else(|| {
            DomainError::credential(format!(
                "No environment mapping configured for credential type: {}",
                credential_type
            ))
        })?;

        let api_key = read_var(&mapping.api_key_var).ok_or_else(|| {
            DomainError::credential(format!(
                "Environment variable '{}' not set for credential type: {}",
                mapping.api_key_var, credential_type
            ))
        })?;

        let mut credential = Credential::new(credential_type.clone(), api_key);

        for (param_name, env_var) in &mapping.additional_vars {
            if let Some(value) = read_var(env_var) {
                credential = credential.with_param(param_name, value);
            }
        }

        Ok(credential)
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new().with_defaults()
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(
        &self,
        credential_type: &CredentialType,
    ) -> Result<Credential, DomainError> {
        self.read_credential(credential_type)
    }

    async fn supports(&self, credential_type: &CredentialType) -> bool {
        self.mappings
            .get(credential_type)
            .is_some_and(|mapping| read_var(&mapping.api_key_var).is_some())
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str) -> CredentialType {
        CredentialType::Custom(name.to_string())
    }

    #[tokio::test]
    async fn test_env_provider_with_set_variable() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("PD_TEST_SIMPLE_KEY", "key-123") };

        let provider = EnvCredentialProvider::new()
            .with_mapping(custom("simple"), EnvMapping::new("PD_TEST_SIMPLE_KEY"));

        let cred = provider.get_credential(&custom("simple")).await.unwrap();
        assert_eq!(cred.api_key(), "key-123");

        // SAFETY: Test cleanup
        unsafe { env::remove_var("PD_TEST_SIMPLE_KEY") };
    }

    #[tokio::test]
    async fn test_env_provider_missing_variable() {
        let provider = EnvCredentialProvider::new()
            .with_mapping(custom("missing"), EnvMapping::new("PD_NONEXISTENT_VAR_12345"));

        assert!(provider.get_credential(&custom("missing")).await.is_err());
        assert!(!provider.supports(&custom("missing")).await);
    }

    #[tokio::test]
    async fn test_env_provider_empty_variable_is_unset() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("PD_TEST_EMPTY_KEY", "") };

        let provider = EnvCredentialProvider::new()
            .with_mapping(custom("empty"), EnvMapping::new("PD_TEST_EMPTY_KEY"));

        assert!(!provider.supports(&custom("empty")).await);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("PD_TEST_EMPTY_KEY") };
    }

    #[tokio::test]
    async fn test_env_provider_with_azure_params() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::set_var("PD_TEST_AZURE_KEY", "azure-key");
            env::set_var("PD_TEST_AZURE_ENDPOINT", "https://test.openai.azure.com");
            env::set_var("PD_TEST_AZURE_VERSION", "2024-06-01");
        }

        let provider = EnvCredentialProvider::new().with_mapping(
            CredentialType::AzureOpenAi,
            EnvMapping::new("PD_TEST_AZURE_KEY")
                .with_var(ENDPOINT_PARAM, "PD_TEST_AZURE_ENDPOINT")
                .with_var(API_VERSION_PARAM, "PD_TEST_AZURE_VERSION")
                .with_var(DEPLOYMENT_PARAM, "PD_TEST_AZURE_DEPLOYMENT_UNSET"),
        );

        let cred = provider
            .get_credential(&CredentialType::AzureOpenAi)
            .await
            .unwrap();

        assert_eq!(cred.api_key(), "azure-key");
        assert_eq!(
            cred.get_param(ENDPOINT_PARAM),
            Some(&"https://test.openai.azure.com".to_string())
        );
        assert_eq!(cred.get_param(API_VERSION_PARAM), Some(&"2024-06-01".to_string()));
        assert!(cred.get_param(DEPLOYMENT_PARAM).is_none());

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("PD_TEST_AZURE_KEY");
            env::remove_var("PD_TEST_AZURE_ENDPOINT");
            env::remove_var("PD_TEST_AZURE_VERSION");
        }
    }

    #[test]
    fn test_default_mapping_covers_azure_variables() {
        let provider = EnvCredentialProvider::default();
        let mapping = &provider.mappings[&CredentialType::AzureOpenAi];

        assert_eq!(mapping.api_key_var, "AZURE_OPENAI_API_KEY");
        assert_eq!(mapping.additional_vars[ENDPOINT_PARAM], "AZURE_OPENAI_ENDPOINT");
        assert_eq!(mapping.additional_vars[API_VERSION_PARAM], "AZURE_OPENAI_API_VERSION");
        assert_eq!(
            mapping.additional_vars[DEPLOYMENT_PARAM],
            "AZURE_OPENAI_DEPLOYMENT_NAME"
        );
    }
}
