use async_trait::async_trait;
use keyring::Entry;
use log::warn;
use serde::{Deserialize, Serialize};
use yup_oauth2::{ApplicationSecret, InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use crate::error::AuthError;

pub const KEYRING_SERVICE_NAME: &str = "gmail-snapshot-credentials";
pub const KEYRING_USERNAME: &str = "default_user"; // Could be user's email if available

const GMAIL_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/gmail.readonly";
const CLIENT_SECRET_FILE: &str = "client_secret.json";

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct SecureCredentials {
    pub client_secret: Option<ApplicationSecret>,
    pub token: Option<String>,
}

// Define a trait for Keyring operations to allow mocking
#[cfg_attr(test, mockall::automock)]
pub trait KeyringEntry: Send + Sync {
    fn get_password(&self) -> Result<String, keyring::Error>;
    fn set_password(&self, password: &str) -> Result<(), keyring::Error>;
    fn delete_password(&self) -> Result<(), keyring::Error>;
}

// Implement the trait for the real keyring::Entry
impl KeyringEntry for Entry {
    fn get_password(&self) -> Result<String, keyring::Error> {
        self.get_password()
    }
    fn set_password(&self, password: &str) -> Result<(), keyring::Error> {
        self.set_password(password)
    }
    fn delete_password(&self) -> Result<(), keyring::Error> {
        self.delete_password()
    }
}

// Define a trait for OAuth flow operations to allow mocking
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OAuthFlow: Send + Sync {
    async fn perform_flow(
        &self,
        secret: ApplicationSecret,
        scopes: Vec<String>,
    ) -> Result<String, AuthError>;
}

// Implement the trait for the real InstalledFlowAuthenticator
pub struct RealOAuthFlow;

#[async_trait]
impl OAuthFlow for RealOAuthFlow {
    async fn perform_flow(
        &self,
        secret: ApplicationSecret,
        scopes: Vec<String>,
    ) -> Result<String, AuthError> {
        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
                .build()
                .await
                .map_err(|e| AuthError::OAuth(e.to_string()))?;
        let scopes_refs: Vec<&str> = scopes.iter().map(|s| s.as_str()).collect();
        let token = auth
            .token(&scopes_refs)
            .await
            .map_err(|e| AuthError::OAuth(e.to_string()))?;
        Ok(token.token().unwrap_or("").to_string())
    }
}

fn load_secure_credentials<K: KeyringEntry>(
    credentials_keyring: &K,
) -> Result<SecureCredentials, AuthError> {
    let credentials_json = credentials_keyring.get_password()?;
    let credentials: SecureCredentials = serde_json::from_str(&credentials_json)?;
    Ok(credentials)
}

fn save_secure_credentials<K: KeyringEntry>(
    credentials_keyring: &K,
    credentials: &SecureCredentials,
) -> Result<(), AuthError> {
    let credentials_json = serde_json::to_string(credentials)?;
    credentials_keyring.set_password(&credentials_json)?;
    Ok(())
}

/// Obtain a bearer token: reuse the keyring-stored one when present,
/// otherwise run the installed-app OAuth flow and persist the result.
///
/// A stale stored token is not refreshed here; `--clear-keyring` plus a
/// rerun forces a fresh flow.
pub async fn try_authenticate() -> Result<String, AuthError> {
    let credentials_keyring = Entry::new(KEYRING_SERVICE_NAME, KEYRING_USERNAME)?;
    try_authenticate_with(&credentials_keyring, &RealOAuthFlow).await
}

async fn try_authenticate_with<K: KeyringEntry, O: OAuthFlow>(
    credentials_keyring: &K,
    oauth_flow_impl: &O,
) -> Result<String, AuthError> {
    let mut credentials = load_secure_credentials(credentials_keyring).unwrap_or_default();

    if let Some(token) = credentials.token.clone() {
        return Ok(token);
    }

    let secret = match credentials.client_secret.clone() {
        Some(secret) => secret,
        None => yup_oauth2::read_application_secret(CLIENT_SECRET_FILE)
            .await
            .map_err(|e| {
                AuthError::OAuth(format!("failed to read {}: {}", CLIENT_SECRET_FILE, e))
            })?,
    };

    let token = oauth_flow_impl
        .perform_flow(secret.clone(), vec![GMAIL_READONLY_SCOPE.to_string()])
        .await?;

    credentials.client_secret = Some(secret);
    credentials.token = Some(token.clone());
    if let Err(e) = save_secure_credentials(credentials_keyring, &credentials) {
        warn!("failed to save credentials to keyring: {}", e);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_json(credentials: &SecureCredentials) -> String {
        serde_json::to_string(credentials).unwrap()
    }

    #[tokio::test]
    async fn stored_token_skips_oauth_flow() {
        let mut keyring = MockKeyringEntry::new();
        let stored = stored_json(&SecureCredentials {
            client_secret: Some(ApplicationSecret::default()),
            token: Some("cached-token".to_string()),
        });
        keyring
            .expect_get_password()
            .times(1)
            .returning(move || Ok(stored.clone()));

        // The flow mock has no expectations; calling it would panic.
        let flow = MockOAuthFlow::new();

        let token = try_authenticate_with(&keyring, &flow).await.unwrap();
        assert_eq!(token, "cached-token");
    }

    #[tokio::test]
    async fn missing_token_runs_flow_and_persists() {
        let mut keyring = MockKeyringEntry::new();
        let stored = stored_json(&SecureCredentials {
            client_secret: Some(ApplicationSecret::default()),
            token: None,
        });
        keyring
            .expect_get_password()
            .times(1)
            .returning(move || Ok(stored.clone()));
        keyring
            .expect_set_password()
            .times(1)
            .withf(|saved| saved.contains("fresh-token"))
            .returning(|_| Ok(()));

        let mut flow = MockOAuthFlow::new();
        flow.expect_perform_flow()
            .times(1)
            .withf(|_, scopes| scopes == &[GMAIL_READONLY_SCOPE.to_string()])
            .returning(|_, _| Ok("fresh-token".to_string()));

        let token = try_authenticate_with(&keyring, &flow).await.unwrap();
        assert_eq!(token, "fresh-token");
    }

    #[tokio::test]
    async fn keyring_save_failure_still_returns_token() {
        let mut keyring = MockKeyringEntry::new();
        let stored = stored_json(&SecureCredentials {
            client_secret: Some(ApplicationSecret::default()),
            token: None,
        });
        keyring
            .expect_get_password()
            .times(1)
            .returning(move || Ok(stored.clone()));
        keyring
            .expect_set_password()
            .times(1)
            .returning(|_| Err(keyring::Error::NoEntry));

        let mut flow = MockOAuthFlow::new();
        flow.expect_perform_flow()
            .times(1)
            .returning(|_, _| Ok("fresh-token".to_string()));

        let token = try_authenticate_with(&keyring, &flow).await.unwrap();
        assert_eq!(token, "fresh-token");
    }
}
