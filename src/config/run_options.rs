// ==========================================
// 住房供给管线数据 - 命令行选项
// ==========================================
// 生成器: 无需参数；可选 --preset / --profile / --output / --csv / --lang
// 校验器: 可选位置参数 <path>；可选 --strict / --policy / --lang
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::growth_profile::{GrowthPreset, GrowthProfile};
use crate::config::validation_policy::TargetBoundPolicy;
use crate::i18n;
use std::path::PathBuf;

// ==========================================
// GenerateOptions - 生成器选项
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub preset: GrowthPreset,
    /// 自定义参数文件（优先于 preset）
    pub profile_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub locale: Option<String>,
    pub help: bool,
}

impl GenerateOptions {
    /// 解析参数（不含程序名）
    pub fn parse<I>(args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--preset" => options.preset = next_value(&mut args, &arg)?.parse()?,
                "--profile" => options.profile_path = Some(next_value(&mut args, &arg)?.into()),
                "--output" | "-o" => options.output = Some(next_value(&mut args, &arg)?.into()),
                "--csv" => options.csv = Some(next_value(&mut args, &arg)?.into()),
                "--lang" => options.locale = Some(parse_locale(next_value(&mut args, &arg)?)?),
                "--help" | "-h" => options.help = true,
                other if other.starts_with('-') => {
                    return Err(ConfigError::UnknownArgument(other.to_string()))
                }
                other => return Err(ConfigError::UnexpectedArgument(other.to_string())),
            }
        }

        Ok(options)
    }

    /// 解析最终使用的增长参数
    pub fn resolve_profile(&self) -> ConfigResult<GrowthProfile> {
        match &self.profile_path {
            Some(path) => GrowthProfile::from_json_file(path),
            None => Ok(self.preset.profile()),
        }
    }

    /// 输出路径（缺省为固定文件名）
    pub fn output_path(&self, profile: &GrowthProfile) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(profile.output_file_name()))
    }

    pub fn usage() -> &'static str {
        "usage: generate_housing_data [--preset canonical|independent_submitted|unguarded] \
         [--profile <profile.json>] [--output <path>] [--csv <path>] [--lang en|he]"
    }
}

// ==========================================
// ValidateOptions - 校验器选项
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidateOptions {
    pub path: Option<PathBuf>,
    pub policy: TargetBoundPolicy,
    pub locale: Option<String>,
    pub help: bool,
}

impl ValidateOptions {
    /// 解析参数（不含程序名）
    pub fn parse<I>(args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strict" => options.policy = TargetBoundPolicy::PerComponentAndSum,
                "--policy" => options.policy = next_value(&mut args, &arg)?.parse()?,
                "--lang" => options.locale = Some(parse_locale(next_value(&mut args, &arg)?)?),
                "--help" | "-h" => options.help = true,
                other if other.starts_with('-') => {
                    return Err(ConfigError::UnknownArgument(other.to_string()))
                }
                other => {
                    if options.path.is_some() {
                        return Err(ConfigError::UnexpectedArgument(other.to_string()));
                    }
                    options.path = Some(PathBuf::from(other));
                }
            }
        }

        Ok(options)
    }

    /// 待校验文件（缺省为 canonical 固定文件名）
    pub fn input_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(GrowthProfile::default().output_file_name()))
    }

    pub fn usage() -> &'static str {
        "usage: validate_housing_data [path] [--strict | --policy marketed_only|strict] [--lang en|he]"
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> ConfigResult<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_locale(value: String) -> ConfigResult<String> {
    if i18n::is_supported(&value) {
        Ok(value)
    } else {
        Err(ConfigError::UnsupportedLocale(value))
    }
}
