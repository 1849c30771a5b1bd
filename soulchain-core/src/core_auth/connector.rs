/*
    connector.rs - External auth collaborator seams

    The wallet connector and federated identity provider are external
    SDKs; only their request/response contracts matter here. Mock
    implementations back the tests.
*/

use crate::core_store::model::Address;
use crate::core_store::store::StoreError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by auth collaborators and session handling
#[derive(Debug, Error)]
pub enum AuthError {
    /// The connector refused or the user dismissed the prompt
    #[error("Connector rejected: {0}")]
    ConnectorRejected(String),

    /// The identity provider is unreachable or misconfigured
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Store mutation failed while applying an auth event
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Cryptographic wallet connector
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Prompt for a wallet connection; resolves to the wallet address
    async fn connect(&self) -> AuthResult<Address>;

    /// Tear down the connection
    async fn disconnect(&self) -> AuthResult<()>;
}

/// Federated (non-wallet) identity provider
#[async_trait]
pub trait FederatedIdentityProvider: Send + Sync {
    /// Prompt for a federated sign-in; resolves to the subject id
    async fn sign_in(&self) -> AuthResult<Address>;

    /// Sign the subject out of the provider
    async fn sign_out(&self) -> AuthResult<()>;
}

/// Wallet connector that always yields a fixed address
pub struct MockWalletConnector {
    address: Address,
}

impl MockWalletConnector {
    pub fn new(address: impl Into<String>) -> Self {
        MockWalletConnector {
            address: Address::new(address),
        }
    }
}

#[async_trait]
impl WalletConnector for MockWalletConnector {
    async fn connect(&self) -> AuthResult<Address> {
        Ok(self.address.clone())
    }

    async fn disconnect(&self) -> AuthResult<()> {
        Ok(())
    }
}

/// Federated provider that always yields a fixed subject id
pub struct MockFederatedProvider {
    subject_id: Address,
}

impl MockFederatedProvider {
    pub fn new(subject_id: impl Into<String>) -> Self {
        MockFederatedProvider {
            subject_id: Address::new(subject_id),
        }
    }
}

#[async_trait]
impl FederatedIdentityProvider for MockFederatedProvider {
    async fn sign_in(&self) -> AuthResult<Address> {
        Ok(self.subject_id.clone())
    }

    async fn sign_out(&self) -> AuthResult<()> {
        Ok(())
    }
}
