use std::fmt::Debug;

use async_trait::async_trait;

use super::{Credential, CredentialType};
use crate::domain::DomainError;

/// Source of model credentials
///
/// `supports` answers whether a credential of the given type is present at
/// all; `get_credential` may still fail when it is incomplete.
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    async fn get_credential(&self, credential_type: &CredentialType) -> Result<Credential, DomainError>;

    async fn supports(&self, credential_type: &CredentialType) -> bool;

    /// Name used in log fields
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Holds at most one credential, or reports a lookup failure
    #[derive(Debug, Default)]
    pub struct MockCredentialProvider {
        credential: Option<Credential>,
        lookup_error: Option<String>,
    }

    impl MockCredentialProvider {
        pub fn empty() -> Self {
            Self::default()
        }

        pub fn with_credential(credential: Credential) -> Self {
            Self {
                credential: Some(credential),
                lookup_error: None,
            }
        }

        /// Claims support for every type but fails each lookup
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                credential: None,
                lookup_error: Some(message.into()),
            }
        }
    }

    #[async_trait]
    impl CredentialProvider for MockCredentialProvider {
        async fn get_credential(
            &self,
            credential_type: &CredentialType,
        ) -> Result<Credential, DomainError> {
            if let Some(message) = &self.lookup_error {
                return Err(DomainError::credential(message.clone()));
            }

            self.credential
                .as_ref()
                .filter(|c| c.credential_type() == credential_type)
                .cloned()
                .ok_or_else(|| {
                    DomainError::credential(format!(
                        "Credential not found for type: {}",
                        credential_type
                    ))
                })
        }

        async fn supports(&self, credential_type: &CredentialType) -> bool {
            self.lookup_error.is_some()
                || self
                    .credential
                    .as_ref()
                    .is_some_and(|c| c.credential_type() == credential_type)
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
