/// Identity provider seam: who is playing and whether they are logged in
use std::fmt;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Opaque account identifier handed out by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub account: Option<AccountId>,
}

impl Session {
    pub fn authenticated(&self) -> bool {
        self.account.is_some()
    }
}

/// Anything that can log a player in and out
pub trait IdentityProvider {
    fn session(&self) -> &Session;

    /// Log in, returning the account now in session
    fn connect(&mut self) -> Result<AccountId>;

    fn disconnect(&mut self);
}

/// Local stand-in for a wallet login: every connect mints a random
/// address-like account (`0x` followed by 40 hex digits)
pub struct MockWallet<R> {
    rng: R,
    session: Session,
}

impl<R: Rng> MockWallet<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, session: Session::default() }
    }

    fn random_address(&mut self) -> String {
        let mut address = String::with_capacity(42);
        address.push_str("0x");
        for _ in 0..20 {
            let byte: u8 = self.rng.random();
            address.push_str(&format!("{byte:02x}"));
        }
        address
    }
}

impl<R: Rng> IdentityProvider for MockWallet<R> {
    fn session(&self) -> &Session {
        &self.session
    }

    fn connect(&mut self) -> Result<AccountId> {
        if let Some(account) = &self.session.account {
            return Ok(account.clone());
        }
        let account = AccountId::new(self.random_address());
        info!(%account, "wallet connected");
        self.session.account = Some(account.clone());
        Ok(account)
    }

    fn disconnect(&mut self) {
        if let Some(account) = self.session.account.take() {
            info!(%account, "wallet disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn connect_mints_address_like_account() {
        let mut wallet = MockWallet::new(StdRng::seed_from_u64(3));
        assert!(!wallet.session().authenticated());

        let account = wallet.connect().unwrap();
        let id = account.as_str();
        assert_eq!(id.len(), 42);
        assert!(id.starts_with("0x"));
        assert!(id[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(wallet.session().authenticated());
    }

    #[test]
    fn connect_twice_keeps_account() {
        let mut wallet = MockWallet::new(StdRng::seed_from_u64(3));
        let first = wallet.connect().unwrap();
        let second = wallet.connect().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn disconnect_clears_session() {
        let mut wallet = MockWallet::new(StdRng::seed_from_u64(3));
        let first = wallet.connect().unwrap();
        wallet.disconnect();
        assert!(!wallet.session().authenticated());
        let second = wallet.connect().unwrap();
        assert_ne!(first, second);
    }
}
