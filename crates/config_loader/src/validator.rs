//! 配置校验模块
//!
//! 校验规则：
//! - 字段级规则 (validator derive)：target_path / default_profile / profile 名称非空
//! - profile 名称唯一，且不与内置 profile 重名
//! - default_profile 必须是内置或自定义 profile

use std::collections::HashSet;

use contracts::{ChannelProfile, ContractError, LoggerBlueprint};
use validator::Validate;

/// 校验 LoggerBlueprint 配置
///
/// 返回第一个遇到的错误，或 Ok(())。
pub fn validate(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    validate_fields(blueprint)?;
    validate_profile_names(blueprint)?;
    validate_default_profile(blueprint)?;
    Ok(())
}

/// 字段级校验
fn validate_fields(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    blueprint.validate().map_err(|errors| {
        let field = errors
            .errors()
            .keys()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        ContractError::config_validation(field, errors.to_string())
    })
}

/// 校验 profile 名称唯一性
fn validate_profile_names(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for profile in &blueprint.profiles {
        if ChannelProfile::builtin_by_name(&profile.name).is_some() {
            return Err(ContractError::config_validation(
                format!("profiles[name={}]", profile.name),
                "profile name shadows a built-in profile",
            ));
        }
        if !seen.insert(profile.name.as_str()) {
            return Err(ContractError::config_validation(
                format!("profiles[name={}]", profile.name),
                "duplicate profile name",
            ));
        }
    }
    Ok(())
}

/// 校验 default_profile 可解析
fn validate_default_profile(blueprint: &LoggerBlueprint) -> Result<(), ContractError> {
    let name = blueprint.default_profile.as_str();
    let known = ChannelProfile::builtin_by_name(name).is_some()
        || blueprint.profiles.iter().any(|p| p.name == name);

    if !known {
        return Err(ContractError::config_validation(
            "default_profile",
            format!("default_profile '{name}' is neither built-in nor defined in profiles"),
        ));
    }
    Ok(())
}
