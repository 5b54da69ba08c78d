//! Mock API tests for the brickset-http crate.
//!
//! These tests use wiremock to simulate the BrickSet API and check the
//! client's request shapes and response mapping without network access
//! or real credentials.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brickset_core::traits::{Account, Catalog};
use brickset_core::{ApiKey, ApiUrl, Credentials, SetNumber, SetQuery, SetRef, UserToken};
use brickset_http::{BricksetClient, UserSession};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn mock_client(server: &MockServer) -> BricksetClient {
    BricksetClient::with_url(mock_api_url(server), ApiKey::new("test-key"))
}

fn set_row(set_id: u32, number: &str, name: &str) -> serde_json::Value {
    json!({
        "setID": set_id,
        "number": number,
        "numberVariant": 1,
        "name": name,
        "year": 2012,
        "theme": "The Hobbit",
        "released": true
    })
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=secret123"))
        .and(body_string_contains("apiKey=test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "hash": "user-token-123"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let session = client
        .login(Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    assert_eq!(session.user_token().as_str(), "user-token-123");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Invalid username and/or password"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.login(Credentials::new("bad", "wrongpass")).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("login rejected"));
    assert!(err.contains("Invalid username and/or password"));
}

#[tokio::test]
async fn test_login_without_hash_in_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success"})),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.login(Credentials::new("alice", "secret")).await;

    assert!(result.unwrap_err().to_string().contains("login rejected"));
}

#[tokio::test]
async fn test_check_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/checkUserHash"))
        .and(body_string_contains("userHash=good-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success"})),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.check_token(&UserToken::new("good-token")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_check_token_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/checkUserHash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Invalid user hash"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.check_token(&UserToken::new("stale-token")).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("user token rejected"));
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_search_sets_paginates_until_matches_satisfied() {
    let server = MockServer::start().await;

    // "pageNumber":1 url-encodes to %22pageNumber%22%3A1 in the form body.
    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("%22pageNumber%22%3A1"))
        .and(body_string_contains("userHash=&apiKey=test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 3,
            "sets": [
                set_row(1, "79001", "Escape from Mirkwood Spiders"),
                set_row(2, "79002", "Attack of the Wargs")
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("%22pageNumber%22%3A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 3,
            "sets": [set_row(3, "79003", "An Unexpected Gathering")]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let sets = client
        .search_sets(&SetQuery::new().theme("The Hobbit"))
        .await
        .unwrap();

    assert_eq!(sets.len(), 3);
    assert_eq!(sets[2].name, "An Unexpected Gathering");
}

#[tokio::test]
async fn test_search_sets_stops_on_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("%22pageNumber%22%3A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 5,
            "sets": [set_row(1, "79001", "Escape from Mirkwood Spiders")]
        })))
        .mount(&server)
        .await;

    // The server disagrees with itself: more matches, but no more rows.
    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("%22pageNumber%22%3A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 5,
            "sets": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let sets = client.search_sets(&SetQuery::new()).await.unwrap();

    assert_eq!(sets.len(), 1);
}

#[tokio::test]
async fn test_get_set_normalizes_set_number() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("79003-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 1,
            "sets": [set_row(26049, "79003", "An Unexpected Gathering")]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let number = SetNumber::new("79003").unwrap();
    let set = client
        .get_set(&SetRef::Number(number))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(set.set_id, 26049);
    assert_eq!(set.full_number(), "79003-1");
}

#[tokio::test]
async fn test_get_set_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 0,
            "sets": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let set = client.get_set(&SetRef::Id(999999)).await.unwrap();

    assert!(set.is_none());
}

#[tokio::test]
async fn test_set_instructions_resolves_set_number() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("9752-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 1,
            "sets": [set_row(9752, "9752", "RCX")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/getInstructions"))
        .and(query_param("setID", "9752"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "instructions": [
                {
                    "URL": "https://example.com/1.pdf",
                    "description": "BI 3004/60 - 9752 V29 1/2"
                },
                {
                    "URL": "https://example.com/2.pdf",
                    "description": "BI 3004/60 - 9752 V29 2/2"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let number = SetNumber::new("9752").unwrap();
    let instructions = client
        .set_instructions(&SetRef::Number(number))
        .await
        .unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].version.as_deref(), Some("V29"));
    assert_eq!(instructions[0].part, Some(1));
    assert_eq!(instructions[0].parts, Some(2));
    assert_eq!(instructions[1].part, Some(2));
}

#[tokio::test]
async fn test_set_instructions_unknown_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 0,
            "sets": []
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let number = SetNumber::new("99999").unwrap();
    let instructions = client
        .set_instructions(&SetRef::Number(number))
        .await
        .unwrap();

    assert!(instructions.is_empty());
}

#[tokio::test]
async fn test_themes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getThemes"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "themes": [
                {
                    "theme": "Technic",
                    "subthemeCount": 28,
                    "setCount": "1234",
                    "yearFrom": "1977",
                    "yearTo": "2021"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let themes = client.themes().await.unwrap();

    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name, "Technic");
    assert_eq!(themes[0].year_from, 1977);
    assert!(!themes[0].is_subtheme());
}

#[tokio::test]
async fn test_subthemes_filters_placeholder_rows() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSubthemes"))
        .and(body_string_contains("Theme=Technic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "subthemes": [
                {
                    "theme": "Technic",
                    "subtheme": "Expert Builder",
                    "setCount": 20,
                    "yearFrom": 1977,
                    "yearTo": 1984
                },
                {
                    "theme": "Technic",
                    "subtheme": "{None}",
                    "setCount": 400,
                    "yearFrom": 1977,
                    "yearTo": 2021
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let subthemes = client.subthemes("Technic").await.unwrap();

    assert_eq!(subthemes.len(), 1);
    assert_eq!(subthemes[0].name, "Expert Builder");
    assert_eq!(subthemes[0].parent.as_deref(), Some("Technic"));
}

#[tokio::test]
async fn test_theme_years() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getYears"))
        .and(body_string_contains("Theme=The+Hobbit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "years": [
                {"theme": "The Hobbit", "year": "2012", "setCount": 6},
                {"theme": "The Hobbit", "year": "2013", "setCount": 8}
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let years = client.theme_years(Some("The Hobbit")).await.unwrap();

    assert_eq!(years.len(), 2);
    assert_eq!(years[0].year, 2012);
    assert_eq!(years[1].set_count, 8);
}

// ============================================================================
// Account Tests
// ============================================================================

fn mock_session(server: &MockServer) -> UserSession {
    UserSession::from_token(mock_client(server), UserToken::new("user-token"))
}

#[tokio::test]
async fn test_user_sets_sends_token_and_scope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getSets"))
        .and(body_string_contains("userHash=user-token"))
        .and(body_string_contains("%22owned%22%3A1"))
        .and(body_string_contains("%22wanted%22%3A0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "matches": 1,
            "sets": [{
                "setID": 1,
                "number": "9752",
                "numberVariant": 1,
                "name": "RCX",
                "year": 1998,
                "released": true,
                "collection": {"owned": true, "wanted": false, "qtyOwned": 1}
            }]
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let sets = session
        .search_sets(&SetQuery::new(), true, false)
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    assert!(sets[0].collection.as_ref().unwrap().owned);
}

#[tokio::test]
async fn test_user_minifigs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getMinifigCollection"))
        .and(body_string_contains("userHash=user-token"))
        .and(body_string_contains("Sparrow"))
        .and(body_string_contains("%22owned%22%3A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "minifigs": [{
                "minifigNumber": "poc001",
                "name": "Jack Sparrow",
                "category": "Pirates of the Caribbean",
                "ownedInSets": 1,
                "ownedLoose": 0,
                "ownedTotal": 1,
                "wanted": false
            }]
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let minifigs = session.minifigs(Some("Sparrow"), true, false).await.unwrap();

    assert_eq!(minifigs.len(), 1);
    assert_eq!(minifigs[0].minifig_id, "poc001");
    assert_eq!(minifigs[0].owned_total, 1);
}

#[tokio::test]
async fn test_user_notes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getUserNotes"))
        .and(body_string_contains("userHash=user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "userNotes": [
                {"setID": 26049, "notes": "sealed box"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/getUserMinifigNotes"))
        .and(body_string_contains("userHash=user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "userMinifigNotes": [
                {"minifigNumber": "poc001", "notes": "missing hat"}
            ]
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);

    let notes = session.set_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].set_id, 26049);
    assert_eq!(notes[0].notes, "sealed box");

    let minifig_notes = session.minifig_notes().await.unwrap();
    assert_eq!(minifig_notes[0].minifig_id, "poc001");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_error_envelope_on_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getThemes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.themes().await.unwrap_err().to_string();

    assert!(err.contains("Invalid API key"));
}

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getThemes"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.themes().await.unwrap_err().to_string();

    assert!(err.contains("500"));
}

#[tokio::test]
async fn test_empty_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.login(Credentials::new("alice", "secret")).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("503"));
}

#[tokio::test]
async fn test_download() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/79003-1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg-bytes".to_vec()))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let url = format!("http://127.0.0.1:{}/images/79003-1.jpg", server.address().port());
    let bytes = client.download(&url).await.unwrap();

    assert_eq!(bytes, b"jpeg-bytes");
}
