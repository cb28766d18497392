use tabled::Table;

use crate::{
    config::Config,
    error, info, spotify,
    types::TrackTableRow,
    warning,
};

/// Prints the top tracks of an artist looked up by name.
///
/// Uses the Client Credentials grant, so no user login is involved. An
/// artist that cannot be found is a normal outcome, not an error.
pub async fn top_tracks(artist_name: &str, market: &str) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    let token = match spotify::auth::client_credentials_token(&config).await {
        Ok(token) => token,
        Err(e) => error!("Failed to obtain app token. Err: {}", e),
    };

    let artist = match spotify::artists::search_artist(&token.access_token, artist_name, &config).await
    {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            warning!("No artist found for '{}'.", artist_name);
            return;
        }
        Err(e) => error!("Artist search failed. Err: {}", e),
    };

    let tracks =
        match spotify::artists::top_tracks(&token.access_token, &artist.id, market, &config).await {
            Ok(tracks) => tracks,
            Err(e) => error!("Failed to fetch top tracks. Err: {}", e),
        };

    if tracks.is_empty() {
        warning!("No top tracks found for {}.", artist.name);
        return;
    }

    info!("Top tracks for {} ({})", artist.name, market);
    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| TrackTableRow {
            position: idx + 1,
            name: track.name.clone(),
            artists: track.artist_names(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
