use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::azure_openai::{AzureOpenAiConfig, AzureOpenAiProvider};
use super::http_client::HttpClient;
use crate::domain::DomainError;
use crate::domain::credentials::{Credential, CredentialProvider, CredentialType};
use crate::domain::llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, LlmClient, LlmProvider};

/// Credential parameter holding the resource endpoint
pub const ENDPOINT_PARAM: &str = "endpoint";
/// Credential parameter holding the API version
pub const API_VERSION_PARAM: &str = "api_version";
/// Credential parameter holding the deployment name
pub const DEPLOYMENT_PARAM: &str = "deployment";

/// Generation and transport settings applied to every client
#[derive(Debug, Clone)]
pub struct LlmClientOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl Default for LlmClientOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Factory for LLM clients
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create an Azure OpenAI client from a complete credential
    pub fn create(
        credential: &Credential,
        options: &LlmClientOptions,
    ) -> Result<LlmClient, DomainError> {
        Self::validate_credential_type(credential, &CredentialType::AzureOpenAi)?;

        let endpoint = credential.require_param(ENDPOINT_PARAM)?;
        let api_version = credential.require_param(API_VERSION_PARAM)?;
        let deployment = credential.require_param(DEPLOYMENT_PARAM)?;

        if credential.api_key().trim().is_empty() {
            return Err(DomainError::credential("Azure OpenAI API key is empty"));
        }

        let http_client = HttpClient::with_timeout(options.request_timeout)?;
        let config =
            AzureOpenAiConfig::new(endpoint, credential.api_key()).with_api_version(api_version);
        let provider: Arc<dyn LlmProvider> = Arc::new(AzureOpenAiProvider::new(http_client, config));

        Ok(LlmClient::new(provider, deployment)
            .with_temperature(options.temperature)
            .with_max_tokens(options.max_tokens))
    }

    /// Resolve a client, or `None` when any Azure credential is missing
    ///
    /// Only transport setup failures are errors.
    pub async fn resolve(
        credentials: &dyn CredentialProvider,
        options: &LlmClientOptions,
    ) -> Result<Option<LlmClient>, DomainError> {
        let credential_type = CredentialType::AzureOpenAi;

        if !credentials.supports(&credential_type).await {
            info!(
                source = credentials.provider_name(),
                "Azure OpenAI not configured, summaries will be skipped"
            );
            return Ok(None);
        }

        let credential = match credentials.get_credential(&credential_type).await {
            Ok(credential) => credential,
            Err(error) => {
                warn!(error = %error, "Azure OpenAI credential unavailable");
                return Ok(None);
            }
        };

        match Self::create(&credential, options) {
            Ok(client) => {
                info!(
                    deployment = client.model(),
                    provider = client.provider_name(),
                    "LLM client configured"
                );
                Ok(Some(client))
            }
            Err(DomainError::Credential { message }) => {
                warn!(reason = %message, "Azure OpenAI credentials incomplete, summaries will be skipped");
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    fn validate_credential_type(
        credential: &Credential,
        expected: &CredentialType,
    ) -> Result<(), DomainError> {
        if credential.credential_type() != expected {
            return Err(DomainError::configuration(format!(
                "Expected credential type {:?}, got {:?}",
                expected,
                credential.credential_type()
            )));
        }
        Ok(())
    }
}
