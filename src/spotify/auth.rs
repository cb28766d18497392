use reqwest::{Client, Url, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::Config,
    error::{ApiError, AuthError},
    types::Token,
    utils,
};

/// Builds the authorization redirect URL for the interactive login flow.
///
/// All query parameters are percent-encoded by the URL builder; the scope
/// string in particular contains spaces and must not be concatenated by
/// hand. The `redirect_uri` placed here is the exact configured value that
/// [`exchange_code`] later submits to the token endpoint.
pub fn authorize_url(config: &Config) -> Result<String, ApiError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
        ],
    )
    .map_err(|e| ApiError::Internal(format!("invalid authorization URL: {e}")))?;

    Ok(url.into())
}

/// Exchanges a one-time authorization code for an access token.
///
/// Submits the `authorization_code` grant as a form-encoded POST carrying
/// the code, the redirect URI and the client credentials. The redirect URI
/// must byte-for-byte match the one used in the authorization redirect or
/// the authorization server rejects the exchange.
///
/// The exchange succeeds only if the response body contains an
/// `access_token` field. Any other body, regardless of status code, is
/// surfaced as [`AuthError::TokenExchange`] with the raw payload attached
/// so the caller can decide what to expose.
pub async fn exchange_code(code: &str, config: &Config) -> Result<Token, AuthError> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ])
        .send()
        .await?;

    token_from_response(res).await
}

/// Obtains an app-only access token via the Client Credentials grant.
///
/// Authenticates with HTTP Basic `base64(client_id:client_secret)` instead
/// of form fields. The resulting token carries no user identity and is used
/// for read-only catalog lookups (artist search, top tracks).
pub async fn client_credentials_token(config: &Config) -> Result<Token, AuthError> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    token_from_response(res).await
}

async fn token_from_response(res: reqwest::Response) -> Result<Token, AuthError> {
    let status = res.status();
    let body = res.text().await?;

    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    match Token::from_response(&json) {
        Some(token) => Ok(token),
        None => Err(AuthError::TokenExchange { status, body }),
    }
}
