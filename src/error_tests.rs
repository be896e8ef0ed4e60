//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::HoroscopeError;

    #[test]
    fn test_invalid_argument() {
        let err = HoroscopeError::InvalidArgument("sentence count must be at least 1, got 0".to_string());
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_empty_selection() {
        let err = HoroscopeError::EmptySelection;
        assert!(err.to_string().contains("empty selection"));
    }

    #[test]
    fn test_config_error() {
        let err = HoroscopeError::Config("statement table is empty".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("statement table is empty"));
    }

    #[test]
    fn test_config_load_from() {
        let err: HoroscopeError = config::ConfigError::Message("bad file".to_string()).into();
        let msg = err.to_string();
        assert!(msg.contains("Failed to load configuration"));
        assert!(msg.contains("bad file"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = HoroscopeError::EmptySelection;
        let debug = format!("{:?}", err);
        assert!(debug.contains("EmptySelection"));
    }

    #[test]
    fn test_error_variants_distinct() {
        let invalid = HoroscopeError::InvalidArgument("test".to_string());
        let config = HoroscopeError::Config("test".to_string());

        assert_ne!(invalid.to_string(), config.to_string());
    }
}
