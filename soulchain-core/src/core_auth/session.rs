/*
    session.rs - Translates auth collaborator events into store mutations

    Rules (one place, not per view):
    - wallet connect replaces whatever user was active with a fresh
      wallet-tier record
    - wallet disconnect clears the user only if it was wallet-sourced
    - federated sign-in is ignored while a wallet user is active
    - federated sign-out clears the user only if it was federated-sourced
    - account deletion resets the whole store
*/

use super::connector::{AuthResult, FederatedIdentityProvider, WalletConnector};
use crate::core_store::model::{Address, User};
use crate::core_store::store::SoulStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Applies auth state changes to the store
pub struct AuthSession {
    store: Arc<SoulStore>,
}

impl AuthSession {
    pub fn new(store: Arc<SoulStore>) -> Self {
        AuthSession { store }
    }

    /// Run the wallet connect flow and apply the result
    pub async fn connect_wallet(&self, connector: &dyn WalletConnector) -> AuthResult<()> {
        self.store.set_auth_loading(true)?;
        let result = connector.connect().await;
        self.store.set_auth_loading(false)?;

        match result {
            Ok(address) => self.handle_wallet_connected(address),
            Err(err) => {
                self.store.set_auth_error(Some(err.to_string()))?;
                Err(err)
            }
        }
    }

    /// Run the federated sign-in flow and apply the result
    pub async fn sign_in_federated(
        &self,
        provider: &dyn FederatedIdentityProvider,
    ) -> AuthResult<()> {
        self.store.set_auth_loading(true)?;
        let result = provider.sign_in().await;
        self.store.set_auth_loading(false)?;

        match result {
            Ok(subject_id) => self.handle_federated_signed_in(subject_id),
            Err(err) => {
                self.store.set_auth_error(Some(err.to_string()))?;
                Err(err)
            }
        }
    }

    /// A wallet reported (address, connected). Constructs a fresh
    /// wallet-tier user; any prior identity is replaced, not merged.
    pub fn handle_wallet_connected(&self, address: Address) -> AuthResult<()> {
        info!(%address, "wallet connected");
        self.store.set_auth_error(None)?;
        self.store.set_user(Some(User::wallet_connected(address)))?;
        Ok(())
    }

    /// The wallet reported a disconnect. Clears the user only when the
    /// active identity was wallet-sourced.
    pub fn handle_wallet_disconnected(&self) -> AuthResult<()> {
        let wallet_sourced = self
            .store
            .user()?
            .map(|u| u.is_wallet_connected)
            .unwrap_or(false);
        if wallet_sourced {
            info!("wallet disconnected, clearing user");
            self.store.set_user(None)?;
        } else {
            debug!("wallet disconnect ignored, active user is not wallet-sourced");
        }
        Ok(())
    }

    /// The federated provider reported (subject_id, present). A wallet
    /// user outranks federated sign-in, so it is ignored in that case.
    pub fn handle_federated_signed_in(&self, subject_id: Address) -> AuthResult<()> {
        let wallet_active = self
            .store
            .user()?
            .map(|u| u.is_wallet_connected)
            .unwrap_or(false);
        if wallet_active {
            debug!("federated sign-in ignored, wallet user active");
            return Ok(());
        }

        info!(subject = %subject_id, "federated sign-in");
        self.store.set_auth_error(None)?;
        self.store.set_user(Some(User::federated(subject_id)))?;
        Ok(())
    }

    /// The federated provider reported sign-out. Clears the user only
    /// when the active identity was federated-sourced.
    pub fn handle_federated_signed_out(&self) -> AuthResult<()> {
        let federated_sourced = self
            .store
            .user()?
            .map(|u| u.is_google_auth && !u.is_wallet_connected)
            .unwrap_or(false);
        if federated_sourced {
            info!("federated sign-out, clearing user");
            self.store.set_user(None)?;
        } else {
            debug!("federated sign-out ignored, active user is not federated-sourced");
        }
        Ok(())
    }

    /// Full account deletion: every collection back to its initial
    /// empty configuration.
    pub fn delete_account(&self) -> AuthResult<()> {
        info!("account deleted, resetting store");
        self.store.reset()?;
        Ok(())
    }
}
