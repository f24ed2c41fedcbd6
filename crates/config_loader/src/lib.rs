//! # Config Loader
//!
//! 日志分发器配置加载。
//!
//! 一个 `chanlog.toml` 描述：
//! - `LogFile` 通道的目标文件与是否串行化写入
//! - 自定义 profile（名称 + 通道集合 + 标志集合）
//! - 未指定目标时使用的默认 profile
//!
//! 加载后的 [`LoggerBlueprint`] 已通过校验：profile 名称唯一、不覆盖内置
//! profile、默认 profile 可解析，可直接交给 `Dispatcher::from_blueprint`。
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("chanlog.toml")).unwrap();
//! println!("{} -> {}", blueprint.default_profile, blueprint.target_path);
//! ```

mod parser;
mod validator;

pub use contracts::LoggerBlueprint;
pub use parser::ConfigFormat;

use contracts::ContractError;
use std::path::Path;

/// Loads and checks [`LoggerBlueprint`]s
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a logger config, picking TOML or JSON by extension
    ///
    /// # Errors
    /// - the file cannot be read ([`ContractError::Io`])
    /// - unknown extension or malformed content ([`ContractError::ConfigParse`])
    /// - a rule is violated, e.g. a duplicate profile name or an unresolvable
    ///   `default_profile`
    pub fn load_from_path(path: &Path) -> Result<LoggerBlueprint, ContractError> {
        let format = Self::detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load a logger config from text already in memory
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<LoggerBlueprint, ContractError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Validate an already constructed blueprint
    pub fn validate(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
        validator::validate(blueprint)
    }

    /// Render as a `chanlog.toml` document
    pub fn to_toml(blueprint: &LoggerBlueprint) -> Result<String, ContractError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Render as JSON
    pub fn to_json(blueprint: &LoggerBlueprint) -> Result<String, ContractError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// `.toml` or `.json`
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL_TOML: &str = r#"
target_path = "logs/app.log"
default_profile = "audit"

[[profiles]]
name = "audit"
channels = ["console_err", "log_file"]
flags = ["force_overwrite"]
"#;

    #[test]
    fn test_load_from_str_toml() {
        let result = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let bp = result.unwrap();
        assert_eq!(bp.target_path, "logs/app.log");
        assert_eq!(bp.default_profile, "audit");
    }

    #[test]
    fn test_round_trip_toml() {
        let bp = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&bp).unwrap();
        let bp2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(bp, bp2);
    }

    #[test]
    fn test_round_trip_json() {
        let bp = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&bp).unwrap();
        let bp2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(bp, bp2);
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let content = r#"
default_profile = "missing"
"#;
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing"));
    }

    #[test]
    fn test_builtin_profile_cannot_be_redefined() {
        let content = r#"
[[profiles]]
name = "error"
channels = ["console_out"]
"#;
        let err = ConfigLoader::load_from_str(content, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ContractError::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chanlog.toml");
        fs::write(&path, MINIMAL_TOML).unwrap();

        let bp = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(bp.profiles.len(), 1);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chanlog.yaml");
        fs::write(&path, "target_path: x").unwrap();

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load_from_path(Path::new("/nonexistent/chanlog.toml"))
            .unwrap_err();
        assert!(matches!(err, ContractError::Io(_)));
    }
}
