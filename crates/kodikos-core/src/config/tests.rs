//! Tests for configuration loading and validation

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::errors::RunnerError;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_wire_contract() {
        let config = RunnerConfig::default();
        assert_eq!(config.workspace.path, PathBuf::from("/tmp/output"));
        assert_eq!(config.protocol.done_marker, "__PYTHON_DONE__");
        assert_eq!(config.protocol.error_prefix, "ERROR: ");
        assert_eq!(config.interpreter.source_encoding, "utf-8");
        assert_eq!(config.interpreter.filename, "<string>");
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = ConfigLoader::from_str("").unwrap();
        assert_eq!(config, RunnerConfig::default());

        let config = ConfigLoader::from_str("   \n").unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = r#"
workspace:
  path: /srv/run
logging:
  level: debug
"#;
        let config = ConfigLoader::from_str(yaml).unwrap();
        assert_eq!(config.workspace.path, PathBuf::from("/srv/run"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.protocol, ProtocolConfig::default());
        assert_eq!(config.interpreter, InterpreterConfig::default());
    }

    #[test]
    fn test_error_prefix_may_be_empty() {
        let yaml = r#"
protocol:
  error_prefix: ""
"#;
        let config = ConfigLoader::from_str(yaml).unwrap();
        assert_eq!(config.protocol.error_prefix, "");
        assert_eq!(config.protocol.done_marker, "__PYTHON_DONE__");
    }

    #[test]
    fn test_rejects_multiline_sentinels() {
        let mut config = RunnerConfig::default();
        config.protocol.done_marker = "DONE\nMORE".to_string();
        assert!(matches!(
            config.validate(),
            Err(RunnerError::ConfigError(msg)) if msg.contains("done_marker")
        ));

        let mut config = RunnerConfig::default();
        config.protocol.error_prefix = "ERR\r\n".to_string();
        assert!(matches!(
            config.validate(),
            Err(RunnerError::ConfigError(msg)) if msg.contains("error_prefix")
        ));
    }

    #[test]
    fn test_rejects_empty_required_fields() {
        let mut config = RunnerConfig::default();
        config.workspace.path = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.protocol.done_marker.clear();
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.interpreter.source_encoding = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = RunnerConfig::default();
        config.interpreter.filename.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let result = ConfigLoader::from_str("workspace: [unterminated");
        assert!(matches!(result, Err(RunnerError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "protocol:").unwrap();
        writeln!(file, "  done_marker: __OK__").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.protocol.done_marker, "__OK__");
        assert_eq!(config.protocol.error_prefix, "ERROR: ");
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.yaml")).await;
        match result {
            Err(RunnerError::ConfigError(msg)) => assert!(msg.contains("absent.yaml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
