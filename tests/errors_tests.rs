use appboard::errors::{AppboardError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_constructors_pick_variant() {
        assert!(matches!(AppboardError::config("x"), AppboardError::Config(_)));
        assert!(matches!(
            AppboardError::file_operation("x"),
            AppboardError::FileOperation(_)
        ));
        assert!(matches!(
            AppboardError::serialization("x"),
            AppboardError::Serialization(_)
        ));
        assert!(matches!(AppboardError::not_found("x"), AppboardError::NotFound(_)));
        assert!(matches!(AppboardError::transport("x"), AppboardError::Transport(_)));
        assert!(matches!(AppboardError::terminal("x"), AppboardError::Terminal(_)));
        assert!(matches!(AppboardError::logging("x"), AppboardError::Logging(_)));
    }

    #[test]
    fn test_display_contains_type_and_message() {
        let error = AppboardError::file_operation("registry file is read-only");
        let text = error.to_string();
        assert!(text.contains("File Operation Error"));
        assert!(text.contains("registry file is read-only"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AppboardError::config(""),
            AppboardError::file_operation(""),
            AppboardError::serialization(""),
            AppboardError::not_found(""),
            AppboardError::transport(""),
            AppboardError::terminal(""),
            AppboardError::logging(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_colored_output_contains_code() {
        let error = AppboardError::not_found("app 'shop'");
        let colored = error.format_colored();
        assert!(colored.contains("E004"));
        assert!(colored.contains("app 'shop'"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: AppboardError = io.into();
        assert!(matches!(error, AppboardError::FileOperation(_)));
        assert!(error.message().contains("denied"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: AppboardError = parse_err.into();
        assert!(matches!(error, AppboardError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_conversion() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/apps.json")?)
        }
        assert!(matches!(read_missing(), Err(AppboardError::FileOperation(_))));
    }
}
