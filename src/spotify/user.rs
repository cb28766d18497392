use reqwest::Client;

use crate::{
    config::Config,
    types::{RecentlyPlayedResponse, Track, UserProfile},
    warning,
};

/// Fetches the authenticated user's profile from `/me`.
///
/// Fetched fresh on every request that needs it; never cached. A non-2xx
/// response is a hard error here because the caller cannot build its
/// response without a profile.
pub async fn get_current_user(token: &str, config: &Config) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}

/// Fetches the user's recently played tracks.
///
/// Downstream failures here must never crash the front door: any transport
/// error, non-200 status or undecodable body is logged and degrades to an
/// empty list, so the caller renders "no data" instead of failing.
pub async fn get_recently_played(token: &str, config: &Config) -> Vec<Track> {
    let api_url = format!("{uri}/me/player/recently-played", uri = &config.api_url);

    let client = Client::new();
    let response = match client.get(&api_url).bearer_auth(token).send().await {
        Ok(resp) => resp,
        Err(err) => {
            warning!("Error fetching recently played: {}", err);
            return Vec::new();
        }
    };

    if !response.status().is_success() {
        warning!("Error fetching recently played: HTTP {}", response.status());
        return Vec::new();
    }

    match response.json::<RecentlyPlayedResponse>().await {
        Ok(res) => res.items.into_iter().map(|item| item.track).collect(),
        Err(err) => {
            warning!("Error decoding recently played: {}", err);
            Vec::new()
        }
    }
}
