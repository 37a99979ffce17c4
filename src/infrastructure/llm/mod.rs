//! LLM provider implementations

mod azure_openai;
mod factory;
mod http_client;

pub use azure_openai::{AzureOpenAiConfig, AzureOpenAiProvider};
pub use factory::{
    API_VERSION_PARAM, DEPLOYMENT_PARAM, ENDPOINT_PARAM, LlmClientOptions, LlmProviderFactory,
};
pub use http_client::{HttpClient, HttpClientTrait};
