//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FplError::MissingLeagueId {
            env_var: "FPL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("FPL_LEAGUE_ID"));
    }

    #[test]
    fn test_fetch_failed_error() {
        let error = FplError::FetchFailed {
            resource: "picks for manager 42 GW3".to_string(),
            status: 404,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("picks for manager 42 GW3"));
        assert!(error_string.contains("404"));
    }

    #[test]
    fn test_fixture_missing_error() {
        let error = FplError::FixtureMissing {
            path: PathBuf::from("data/picks/manager_42_gw_3.json"),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Fixture not found"));
        assert!(error_string.contains("manager_42_gw_3.json"));
    }

    #[test]
    fn test_malformed_payload_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FplError::MalformedPayload {
            resource: "bootstrap-static".to_string(),
            source: json_error,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Malformed bootstrap-static payload"));

        // The underlying serde error stays reachable through source()
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_gameweek_out_of_range_error() {
        let error = FplError::GameweekOutOfRange { value: 39 };
        let error_string = error.to_string();
        assert!(error_string.contains("39"));
        assert!(error_string.contains("out of range"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        // Test that the error implements std::error::Error properly
        let error_trait: &dyn std::error::Error = &fpl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = FplError::GameweekOutOfRange { value: 0 };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("GameweekOutOfRange"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<String> {
            Ok("success".to_string())
        }

        let result = test_function();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FplError::MissingLeagueId {
                env_var: "FPL_LEAGUE_ID".to_string(),
            })
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            FplError::MissingLeagueId { .. } => (),
            _ => panic!("Expected MissingLeagueId error"),
        }
    }
}
