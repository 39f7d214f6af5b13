//! Unit tests for the FPL HTTP client

use super::*;
use crate::cli::types::{Gameweek, LeagueId, ManagerId};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn source_for(server: &MockServer) -> HttpSource {
        HttpSource::new(&server.uri(), TIMEOUT).unwrap()
    }

    #[test]
    fn test_fpl_base_url_constant() {
        assert_eq!(FPL_BASE_URL, "https://fantasy.premierleague.com/api");
    }

    #[test]
    fn test_url_for_each_resource() {
        let source = HttpSource::new("https://example.test/api/", TIMEOUT).unwrap();

        assert_eq!(
            source.url_for(&Resource::Bootstrap),
            "https://example.test/api/bootstrap-static/"
        );
        assert_eq!(
            source.url_for(&Resource::Standings {
                league_id: LeagueId::new(665732)
            }),
            "https://example.test/api/leagues-classic/665732/standings/"
        );
        assert_eq!(
            source.url_for(&Resource::Picks {
                manager_id: ManagerId::new(77),
                gameweek: Gameweek::new(5)
            }),
            "https://example.test/api/entry/77/event/5/picks/"
        );
    }

    #[tokio::test]
    async fn test_fetch_bootstrap_success() {
        let mock_server = MockServer::start().await;

        let mock_response = json!({
            "elements": [{ "id": 233, "web_name": "Salah" }],
            "teams": [{ "id": 12, "name": "Liverpool" }],
            "events": [{ "id": 1, "is_current": true, "finished": false }]
        });

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let payload = source_for(&mock_server)
            .fetch(&Resource::Bootstrap)
            .await
            .unwrap();
        assert_eq!(payload, mock_response);
    }

    #[tokio::test]
    async fn test_fetch_standings_hits_league_route() {
        let mock_server = MockServer::start().await;

        let mock_response = json!({
            "league": { "name": "Office League" },
            "standings": { "results": [] }
        });

        Mock::given(method("GET"))
            .and(path("/leagues-classic/665732/standings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let payload = source_for(&mock_server)
            .fetch(&Resource::Standings {
                league_id: LeagueId::new(665732),
            })
            .await
            .unwrap();
        assert_eq!(payload["league"]["name"], "Office League");
    }

    #[tokio::test]
    async fn test_fetch_error_status_names_the_resource() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/42/event/3/picks/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let resource = Resource::Picks {
            manager_id: ManagerId::new(42),
            gameweek: Gameweek::new(3),
        };
        let err = source_for(&mock_server).fetch(&resource).await.unwrap_err();

        match err {
            FplError::FetchFailed { resource, status } => {
                assert_eq!(status, 404);
                assert!(resource.contains("manager 42"));
                assert!(resource.contains("GW3"));
            }
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_response_is_an_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch(&Resource::Bootstrap)
            .await
            .unwrap_err();

        match err {
            FplError::Http(_) => (),
            other => panic!("Expected Http, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_status_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = source_for(&mock_server)
            .fetch(&Resource::Bootstrap)
            .await
            .unwrap_err();

        match err {
            FplError::FetchFailed { status, .. } => assert_eq!(status, 503),
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }
}
