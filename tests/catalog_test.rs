mod common;

use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use tunegate::{config::SessionMode, spotify};

use common::{SpotifyStub, spawn_stub, test_config};

#[tokio::test]
async fn client_credentials_exchange_uses_basic_auth() {
    let stub = Arc::new(SpotifyStub::ok());
    let stub_addr = spawn_stub(Arc::clone(&stub)).await;
    let config = test_config(stub_addr, SessionMode::Stateless);

    let token = spotify::auth::client_credentials_token(&config)
        .await
        .unwrap();
    assert_eq!(token.access_token, "abc");

    let expected = format!(
        "Basic {}",
        STANDARD.encode("test-client-id:test-client-secret")
    );
    let seen = stub.token_auth_header.lock().unwrap().clone();
    assert_eq!(seen.as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn search_artist_returns_first_match() {
    let stub = Arc::new(SpotifyStub::ok());
    let stub_addr = spawn_stub(Arc::clone(&stub)).await;
    let config = test_config(stub_addr, SessionMode::Stateless);

    let artist = spotify::artists::search_artist("abc", "Magdalena Bay", &config)
        .await
        .unwrap()
        .expect("stub always returns one match");

    assert_eq!(artist.id, "artist-1");
    assert_eq!(artist.name, "Magdalena Bay");
}

#[tokio::test]
async fn search_artist_with_no_results_is_not_an_error() {
    let stub = Arc::new(SpotifyStub::ok().with_empty_search());
    let stub_addr = spawn_stub(Arc::clone(&stub)).await;
    let config = test_config(stub_addr, SessionMode::Stateless);

    let result = spotify::artists::search_artist("abc", "nobody at all", &config).await;

    // Ok(None), distinct from a transport error.
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn top_tracks_are_fetched_for_an_artist_id() {
    let stub = Arc::new(SpotifyStub::ok());
    let stub_addr = spawn_stub(Arc::clone(&stub)).await;
    let config = test_config(stub_addr, SessionMode::Stateless);

    let tracks = spotify::artists::top_tracks("abc", "artist-1", "US", &config)
        .await
        .unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Image");
    assert_eq!(tracks[0].artist_names(), "Magdalena Bay");
}
