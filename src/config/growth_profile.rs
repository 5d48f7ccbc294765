// ==========================================
// 住房供给管线数据 - 增长参数配置
// ==========================================
// 职责: 生成器公式参数 + 命名预设
// 公式: value = base × (1+early)^min(Δ, pivot-start) × (1+late)^max(year-pivot, 0)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ==========================================
// GrowthCurve - 分段复利增长曲线
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurve {
    /// 起始年取值
    pub base: f64,

    /// start_year..pivot_year 的年增长率
    pub early_rate: f64,

    /// pivot_year 之后的年增长率
    pub late_rate: f64,
}

impl GrowthCurve {
    pub const fn new(base: f64, early_rate: f64, late_rate: f64) -> Self {
        Self {
            base,
            early_rate,
            late_rate,
        }
    }

    /// 计算某年的原始值（未截断）
    pub fn value_at(&self, year: i32, start_year: i32, pivot_year: i32) -> f64 {
        let (year, start_year, pivot_year) =
            (i64::from(year), i64::from(start_year), i64::from(pivot_year));
        let early_years = clamp_exponent((year - start_year).min(pivot_year - start_year).max(0));
        let late_years = clamp_exponent((year - pivot_year).max(0));

        self.base
            * (1.0 + self.early_rate).powi(early_years)
            * (1.0 + self.late_rate).powi(late_years)
    }
}

fn clamp_exponent(years: i64) -> i32 {
    i32::try_from(years).unwrap_or(i32::MAX)
}

// ==========================================
// SubmittedModel - submitted 计算方式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SubmittedModel {
    /// planned + (marketed - planned) × fraction，fraction ∈ [0, 1]
    Blend { fraction: f64 },

    /// 独立复利曲线（不保证落在 planned 与 marketed 之间）
    Compound(GrowthCurve),
}

// ==========================================
// GrowthProfile - 生成器完整参数
// ==========================================

/// end_year - start_year 的上限
pub const MAX_YEAR_SPAN: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthProfile {
    pub start_year: i32,
    pub end_year: i32,

    /// 增长率切换年
    pub pivot_year: i32,

    /// start_year 的 required
    pub required_base: f64,

    /// end_year 的 required
    pub required_target: f64,

    pub marketed: GrowthCurve,
    pub planned: GrowthCurve,
    pub submitted: SubmittedModel,

    /// 三阶段合计超出 required 时等比缩放
    pub scaling_guard: bool,

    /// 首年 built = marketed × 该比例
    pub first_year_built_ratio: f64,

    /// 其余年份 built = 上一年 marketed × 该比例
    pub built_ratio: f64,
}

impl Default for GrowthProfile {
    fn default() -> Self {
        Self {
            start_year: 2025,
            end_year: 2040,
            pivot_year: 2030,
            required_base: 67273.0,
            required_target: 250000.0,
            marketed: GrowthCurve::new(35000.0, 0.12, 0.06),
            planned: GrowthCurve::new(2000.0, 0.08, 0.15),
            submitted: SubmittedModel::Blend { fraction: 0.3 },
            scaling_guard: true,
            first_year_built_ratio: 0.8,
            built_ratio: 0.85,
        }
    }
}

impl GrowthProfile {
    /// 从 JSON 文件加载（缺省字段取 canonical 预设值）
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let load_err = |message: String| ConfigError::ProfileLoad {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let profile: GrowthProfile =
            serde_json::from_str(&raw).map_err(|e| load_err(e.to_string()))?;

        profile.validate()?;
        Ok(profile)
    }

    /// 参数合法性检查
    pub fn validate(&self) -> ConfigResult<()> {
        if self.end_year <= self.start_year {
            return Err(ConfigError::InvalidProfile(format!(
                "end_year ({}) must be after start_year ({})",
                self.end_year, self.start_year
            )));
        }

        match self.end_year.checked_sub(self.start_year) {
            Some(span) if span <= MAX_YEAR_SPAN => {}
            _ => {
                return Err(ConfigError::InvalidProfile(format!(
                    "year span {}..={} exceeds {} years",
                    self.start_year, self.end_year, MAX_YEAR_SPAN
                )))
            }
        }

        if self.pivot_year < self.start_year || self.pivot_year > self.end_year {
            return Err(ConfigError::InvalidProfile(format!(
                "pivot_year ({}) must lie within {}..={}",
                self.pivot_year, self.start_year, self.end_year
            )));
        }

        if let SubmittedModel::Blend { fraction } = self.submitted {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ConfigError::InvalidProfile(format!(
                    "submitted blend fraction {} outside [0, 1]",
                    fraction
                )));
            }
        }

        for (name, ratio) in [
            ("first_year_built_ratio", self.first_year_built_ratio),
            ("built_ratio", self.built_ratio),
        ] {
            if ratio < 0.0 {
                return Err(ConfigError::InvalidProfile(format!(
                    "{} must be non-negative, got {}",
                    name, ratio
                )));
            }
        }

        Ok(())
    }

    /// 年份数（含首尾）
    pub fn year_count(&self) -> usize {
        let count = i64::from(self.end_year) - i64::from(self.start_year) + 1;
        usize::try_from(count).unwrap_or(0)
    }

    /// 固定输出文件名: housingData<start>-<end>.json
    pub fn output_file_name(&self) -> String {
        format!("housingData{}-{}.json", self.start_year, self.end_year)
    }
}

// ==========================================
// GrowthPreset - 命名预设
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPreset {
    /// 默认公式集: blend submitted + 缩放保护
    #[default]
    Canonical,
    /// submitted 走独立复利曲线
    IndependentSubmitted,
    /// 关闭缩放保护（违规交由校验器发现）
    Unguarded,
}

impl GrowthPreset {
    pub const ALL: [GrowthPreset; 3] = [
        GrowthPreset::Canonical,
        GrowthPreset::IndependentSubmitted,
        GrowthPreset::Unguarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthPreset::Canonical => "canonical",
            GrowthPreset::IndependentSubmitted => "independent_submitted",
            GrowthPreset::Unguarded => "unguarded",
        }
    }

    pub fn profile(&self) -> GrowthProfile {
        let canonical = GrowthProfile::default();
        match self {
            GrowthPreset::Canonical => canonical,
            GrowthPreset::IndependentSubmitted => GrowthProfile {
                submitted: SubmittedModel::Compound(GrowthCurve::new(3000.0, 0.10, 0.12)),
                ..canonical
            },
            GrowthPreset::Unguarded => GrowthProfile {
                scaling_guard: false,
                ..canonical
            },
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for GrowthPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl fmt::Display for GrowthPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_pivot() {
        let curve = GrowthCurve::new(100.0, 0.1, 0.5);
        assert_eq!(curve.value_at(2025, 2025, 2030), 100.0);
        assert!((curve.value_at(2030, 2025, 2030) - 100.0 * 1.1f64.powi(5)).abs() < 1e-9);
        assert!(
            (curve.value_at(2032, 2025, 2030) - 100.0 * 1.1f64.powi(5) * 1.5f64.powi(2)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_default_profile_is_canonical() {
        let profile = GrowthProfile::default();
        assert_eq!(profile, GrowthPreset::Canonical.profile());
        assert_eq!(profile.year_count(), 16);
        assert_eq!(profile.output_file_name(), "housingData2025-2040.json");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(
            "unguarded".parse::<GrowthPreset>(),
            Ok(GrowthPreset::Unguarded)
        );
        assert_eq!(
            " Independent_Submitted ".parse::<GrowthPreset>(),
            Ok(GrowthPreset::IndependentSubmitted)
        );

        let err = "fast".parse::<GrowthPreset>().unwrap_err();
        assert!(err.to_string().contains("canonical"));
    }

    #[test]
    fn test_presets_differ_from_canonical() {
        assert!(!GrowthPreset::Unguarded.profile().scaling_guard);
        assert!(matches!(
            GrowthPreset::IndependentSubmitted.profile().submitted,
            SubmittedModel::Compound(_)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_profiles() {
        let reversed = GrowthProfile {
            end_year: 2020,
            ..GrowthProfile::default()
        };
        assert!(matches!(
            reversed.validate(),
            Err(ConfigError::InvalidProfile(_))
        ));

        let bad_fraction = GrowthProfile {
            submitted: SubmittedModel::Blend { fraction: 1.5 },
            ..GrowthProfile::default()
        };
        assert!(bad_fraction.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_span() {
        // 跨度溢出 i32 减法
        let overflowing = GrowthProfile {
            start_year: -2_000_000_000,
            end_year: 2_000_000_000,
            pivot_year: 0,
            ..GrowthProfile::default()
        };
        assert!(matches!(
            overflowing.validate(),
            Err(ConfigError::InvalidProfile(_))
        ));
        assert_eq!(overflowing.year_count(), 4_000_000_001);

        // 不溢出但年份数过大
        let huge = GrowthProfile {
            end_year: 2_000_000_000,
            ..GrowthProfile::default()
        };
        assert!(matches!(huge.validate(), Err(ConfigError::InvalidProfile(_))));

        let widest = GrowthProfile {
            end_year: 2025 + MAX_YEAR_SPAN,
            ..GrowthProfile::default()
        };
        assert_eq!(widest.validate(), Ok(()));
        assert_eq!(widest.year_count(), 101);
    }

    #[test]
    fn test_profile_file_with_oversized_span_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"start_year": -2000000000, "end_year": 2000000000, "pivot_year": 0}"#,
        )
        .unwrap();

        assert!(matches!(
            GrowthProfile::from_json_file(&path),
            Err(ConfigError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let profile: GrowthProfile =
            serde_json::from_str(r#"{"scaling_guard": false, "submitted": {"model": "blend", "fraction": 0.5}}"#)
                .unwrap();
        assert!(!profile.scaling_guard);
        assert_eq!(profile.submitted, SubmittedModel::Blend { fraction: 0.5 });
        assert_eq!(profile.start_year, 2025);
        assert_eq!(profile.marketed.base, 35000.0);
    }
}
