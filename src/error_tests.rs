//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::ReviewError;

    #[test]
    fn test_unsupported_format_error() {
        let err = ReviewError::UnsupportedFormat("xlsx".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Unsupported file format"));
        assert!(msg.contains("xlsx"));
        assert!(msg.contains("JSON, CSV, or TXT"));
    }

    #[test]
    fn test_config_error() {
        let err = ReviewError::Config("Missing remote url".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_scorer_error() {
        let err = ReviewError::Scorer("lexicon unavailable".to_string());
        assert!(err.to_string().contains("Scorer error"));
        assert!(err.to_string().contains("lexicon unavailable"));
    }

    #[test]
    fn test_input_error() {
        let err = ReviewError::Input("empty path".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "reviews.json");
        let err: ReviewError = io.into();
        assert!(matches!(err, ReviewError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ReviewError = parse.into();
        assert!(err.to_string().contains("JSON parsing error"));
    }

    #[test]
    fn test_config_crate_error_conversion() {
        let err: ReviewError = config::ConfigError::NotFound("remote.url".to_string()).into();
        assert!(matches!(err, ReviewError::Config(_)));
    }

    #[test]
    fn test_error_is_debug() {
        let err = ReviewError::Scorer("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Scorer"));
    }

    #[test]
    fn test_error_variants_distinct() {
        let scorer = ReviewError::Scorer("test".to_string());
        let input = ReviewError::Input("test".to_string());

        assert_ne!(scorer.to_string(), input.to_string());
    }
}
