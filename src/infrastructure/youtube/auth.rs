//! YouTube OAuth2 authentication adapter

use std::path::Path;

use hyper::client::HttpConnector;
use hyper_rustls::HttpsConnector;
use thiserror::Error;
use yup_oauth2::authenticator::Authenticator;
use yup_oauth2::{read_application_secret, InstalledFlowAuthenticator, InstalledFlowReturnMethod};

/// OAuth scope required for uploads
const UPLOAD_SCOPE: &str = "https://www.googleapis.com/auth/youtube.upload";

/// Authentication errors, all fatal at startup
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read client secrets file: {0}")]
    ClientSecrets(String),

    #[error("OAuth flow failed: {0}")]
    Flow(String),

    #[error("Failed to obtain access token: {0}")]
    Token(String),

    #[error("Authenticator returned an empty access token")]
    EmptyToken,
}

/// Authenticated handle for YouTube API calls.
///
/// Wraps the installed-app OAuth flow: interactive browser consent on the
/// first run, cached-token reuse and refresh afterwards. Built once at
/// startup and treated as opaque by the rest of the program.
pub struct YouTubeAuth {
    inner: AuthInner,
}

enum AuthInner {
    Flow(Box<Authenticator<HttpsConnector<HttpConnector>>>),
    /// Fixed token, for tests and pre-issued credentials
    Static(String),
}

impl YouTubeAuth {
    /// Run (or resume) the installed-app flow, persisting tokens to disk.
    ///
    /// Returns only once a token for the upload scope has actually been
    /// obtained, so consent and refresh problems surface here, at startup,
    /// rather than during the first upload.
    pub async fn authenticate(client_secrets: &Path, token_cache: &Path) -> Result<Self, AuthError> {
        let secret = read_application_secret(client_secrets)
            .await
            .map_err(|e| AuthError::ClientSecrets(e.to_string()))?;

        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
                .persist_tokens_to_disk(token_cache.to_path_buf())
                .build()
                .await
                .map_err(|e| AuthError::Flow(e.to_string()))?;

        let handle = Self {
            inner: AuthInner::Flow(Box::new(auth)),
        };

        // The builder performs no token I/O; the first token request is
        // what runs the consent/refresh flow.
        handle.bearer_token().await?;

        Ok(handle)
    }

    /// Handle backed by a fixed bearer token; no flow, no refresh.
    pub fn with_static_token(token: impl Into<String>) -> Self {
        Self {
            inner: AuthInner::Static(token.into()),
        }
    }

    /// Bearer token for the upload scope, refreshed by the flow as needed.
    pub async fn bearer_token(&self) -> Result<String, AuthError> {
        match &self.inner {
            AuthInner::Flow(auth) => {
                let token = auth
                    .token(&[UPLOAD_SCOPE])
                    .await
                    .map_err(|e| AuthError::Token(e.to_string()))?;
                token
                    .token()
                    .map(str::to_owned)
                    .ok_or(AuthError::EmptyToken)
            }
            AuthInner::Static(token) => Ok(token.clone()),
        }
    }
}
