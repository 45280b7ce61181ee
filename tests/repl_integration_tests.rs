//! Integration Tests for the REPL
//!
//! Drives scripted sessions against an in-process mock of the PokeAPI.

use std::time::Duration;

use pokedex_cli::{repl, ExpiringCache, PokeApiClient, Session};
use rand::rngs::mock::StepRng;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

/// Session whose catch roll is always 0, so every throw succeeds.
fn create_test_session(server: &MockServer) -> Session<StepRng> {
    let client =
        PokeApiClient::new(format!("{}/api/v2", server.uri()), Duration::from_secs(5)).unwrap();
    let cache = ExpiringCache::new(Duration::from_secs(60));
    Session::new(cache, client, StepRng::new(0, 0))
}

async fn run_script(session: &mut Session<StepRng>, script: &str) -> String {
    let mut out = Vec::new();
    repl::run(session, script.as_bytes(), &mut out, "Pokedex > ")
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn list_page(server: &MockServer, names: &[&str], next: Option<&str>, previous: Option<&str>) -> Value {
    let base = format!("{}/api/v2/location-area/", server.uri());
    json!({
        "count": 3,
        "next": next.map(|query| format!("{base}{query}")),
        "previous": previous.map(|query| format!("{base}{query}")),
        "results": names
            .iter()
            .map(|name| json!({"name": name, "url": format!("{base}{name}/")}))
            .collect::<Vec<_>>(),
    })
}

/// Two-page listing; each page may be fetched at most once.
async fn mount_location_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
            server,
            &["canalave-city-area", "eterna-city-area"],
            Some("?offset=2&limit=2"),
            None,
        )))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_page(
            server,
            &["pastoria-city-area"],
            None,
            Some(""),
        )))
        .expect(1)
        .mount(server)
        .await;
}

// == Map Navigation ==

#[tokio::test]
async fn test_map_navigation_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_location_pages(&server).await;
    let mut session = create_test_session(&server);

    let output = run_script(&mut session, "map\nmap\nmapb\nmapb\nmap\nmap\n").await;

    assert_eq!(output.matches("canalave-city-area").count(), 2);
    assert_eq!(output.matches("pastoria-city-area").count(), 2);
    assert!(output.contains("Error: Already at the beginning of the map!"));
    assert!(output.contains("Error: Already at the end of the map!"));
    assert!(session.pager().state().is_at_end());

    let stats = session.cache().stats().await;
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.hits, 2);
}

#[tokio::test]
async fn test_fetch_failure_is_reported_and_state_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut session = create_test_session(&server);

    let output = run_script(&mut session, "map\nhelp\n").await;

    assert!(output.contains("Error: Fetch failed"));
    assert!(output.contains("500"));
    assert!(output.contains("Welcome to the Pokedex!"), "Session continues after error");
    assert!(session.pager().state().is_at_start());
    assert!(session.cache().is_empty().await);
}

// == Explore / Catch / Inspect ==

#[tokio::test]
async fn test_explore_catch_inspect_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/location-area/canalave-city-area"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}},
                {"pokemon": {"name": "staryu", "url": "u"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/tentacool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "tentacool",
            "base_experience": 67,
            "height": 9,
            "weight": 455,
            "stats": [{"base_stat": 40, "stat": {"name": "hp", "url": "u"}}],
            "types": [
                {"slot": 1, "type": {"name": "water", "url": "u"}},
                {"slot": 2, "type": {"name": "poison", "url": "u"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let mut session = create_test_session(&server);

    let output = run_script(
        &mut session,
        "explore canalave-city-area\nEXPLORE Canalave-City-Area\ncatch tentacool\ninspect tentacool\npokedex\n",
    )
    .await;

    assert_eq!(output.matches("Exploring canalave-city-area...").count(), 2);
    assert!(output.contains(" - staryu"));
    assert!(output.contains("Throwing a Pokeball at tentacool..."));
    assert!(output.contains("tentacool was caught!"));
    assert!(output.contains("Height: 9"));
    assert!(output.contains("Weight: 455"));
    assert!(output.contains("  - hp: 40"));
    assert!(output.contains("  - poison"));
    assert!(output.contains("Your Pokedex:\n - tentacool"));
    assert_eq!(session.pokedex().len(), 1);
}

// == Error Recovery ==

#[tokio::test]
async fn test_errors_do_not_end_session() {
    let server = MockServer::start().await;
    let mut session = create_test_session(&server);

    let output = run_script(
        &mut session,
        "inspect pikachu\npokedex\ncatch\nfly\n\nhelp\nexit\nmap\n",
    )
    .await;

    assert!(output.contains("Error: pikachu has not been caught"));
    assert!(output.contains("Error: No Pokemon have been caught yet"));
    assert!(output.contains("Error: Usage: catch <pokemon>"));
    assert!(output.contains("Unknown command: fly"));
    assert!(output.contains("mapb: Show the previous page of location areas"));
    assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));
    assert!(!output.contains("Fetch failed"), "Nothing runs after exit");
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let server = MockServer::start().await;
    let mut session = create_test_session(&server);

    let output = run_script(&mut session, "help").await;

    assert!(output.contains("Welcome to the Pokedex!"));
    assert!(output.ends_with("Pokedex > \n"));
}

#[tokio::test]
async fn test_cache_command_reports_stats() {
    let server = MockServer::start().await;
    mount_location_pages(&server).await;
    let mut session = create_test_session(&server);

    let output = run_script(&mut session, "map\nmap\nmapb\ncache\n").await;

    assert!(output.contains("Cached responses: 2"));
    assert!(output.contains("Hits: 1"));
    assert!(output.contains("Misses: 2 (0 stale)"));
    assert!(output.contains("Hit rate: 33.3%"));
    assert!(output.contains("TTL: 60s (sweep running)"));
}

#[tokio::test]
async fn test_cache_command_reports_stopped_sweep() {
    let server = MockServer::start().await;
    let mut session = create_test_session(&server);

    session.cache().shutdown();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let output = run_script(&mut session, "cache\n").await;

    assert!(output.contains("Cached responses: 0"));
    assert!(output.contains("TTL: 60s (sweep stopped)"));
}

#[tokio::test]
async fn test_catch_announces_throw_before_failed_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let mut session = create_test_session(&server);

    let output = run_script(&mut session, "catch MissingNo\n").await;

    let throw = output
        .find("Throwing a Pokeball at missingno...")
        .expect("throw is announced");
    let error = output.find("Error: Fetch failed").expect("fetch error is reported");
    assert!(throw < error);
    assert!(session.pokedex().is_empty());
}
