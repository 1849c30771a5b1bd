/*
    core_auth - Wallet and federated identity integration

    Traits for the external collaborators plus the session component
    that turns their events into store mutations.
*/

pub mod connector;
pub mod session;

pub use connector::{
    AuthError, AuthResult, FederatedIdentityProvider, MockFederatedProvider,
    MockWalletConnector, WalletConnector,
};
pub use session::AuthSession;
