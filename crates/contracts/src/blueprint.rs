//! LoggerBlueprint - Config Loader 输出
//!
//! 描述日志分发器的完整配置：目标文件、写入串行化、默认 profile、自定义 profile。

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ChannelProfile, ChannelSet, FlagSet};

/// 配置版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// 完整的日志分发器配置蓝图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoggerBlueprint {
    /// 配置版本
    #[serde(default)]
    pub version: ConfigVersion,

    /// LogFile 通道的目标文件
    #[serde(default = "default_target_path")]
    #[validate(length(min = 1, message = "target_path must not be empty"))]
    pub target_path: String,

    /// 同一目标文件的并发写入是否串行化
    #[serde(default = "default_serialize_file_writes")]
    pub serialize_file_writes: bool,

    /// 未指定目标时使用的 profile
    #[serde(default = "default_profile_name")]
    #[validate(length(min = 1, message = "default_profile must not be empty"))]
    pub default_profile: String,

    /// 自定义 profile 列表
    #[serde(default)]
    #[validate(nested)]
    pub profiles: Vec<ProfileConfig>,
}

fn default_target_path() -> String {
    "log.txt".to_string()
}

fn default_serialize_file_writes() -> bool {
    true
}

fn default_profile_name() -> String {
    ChannelProfile::LOG.name().to_string()
}

impl Default for LoggerBlueprint {
    fn default() -> Self {
        Self {
            version: ConfigVersion::default(),
            target_path: default_target_path(),
            serialize_file_writes: default_serialize_file_writes(),
            default_profile: default_profile_name(),
            profiles: Vec::new(),
        }
    }
}

/// 自定义 profile 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileConfig {
    /// Profile 名称
    #[validate(length(min = 1, message = "profile name must not be empty"))]
    pub name: String,

    /// 通道集合
    #[serde(default)]
    pub channels: ChannelSet,

    /// 标志集合
    #[serde(default)]
    pub flags: FlagSet,
}

impl ProfileConfig {
    /// Build the runtime profile
    pub fn to_profile(&self) -> ChannelProfile {
        ChannelProfile::new(self.name.clone(), self.channels, self.flags)
    }
}
