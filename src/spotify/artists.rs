use reqwest::Client;

use crate::{
    config::Config,
    types::{Artist, SearchResponse, TopTracksResponse, Track},
};

/// Searches the catalog for an artist by name, limited to a single match.
///
/// Zero results is a normal outcome and returns `Ok(None)`, distinct from a
/// transport or API error. The query string is percent-encoded by the
/// request builder, so arbitrary user input is safe here.
pub async fn search_artist(
    token: &str,
    name: &str,
    config: &Config,
) -> Result<Option<Artist>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = &config.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("q", name), ("type", "artist"), ("limit", "1")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;
    Ok(res.artists.items.into_iter().next())
}

/// Fetches an artist's top tracks for the given market.
pub async fn top_tracks(
    token: &str,
    artist_id: &str,
    market: &str,
    config: &Config,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{artist_id}/top-tracks",
        uri = &config.api_url
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .query(&[("market", market)])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;
    Ok(res.tracks)
}
