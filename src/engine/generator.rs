// ==========================================
// 住房供给管线数据 - 序列生成器
// ==========================================
// 职责: 按 GrowthProfile 逐年计算 YearRecord
// 步骤: required 线性插值 → 复利增长 → submitted → 缩放保护 → 截断 → built
// 约束: built 只依赖显式传入的上一条记录，不回看共享序列
// ==========================================

use crate::config::{GrowthProfile, SubmittedModel};
use crate::domain::{HousingSeries, YearRecord};

// ==========================================
// StageValues - 管线三阶段原始值（未截断）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageValues {
    pub marketed: f64,
    pub submitted: f64,
    pub planned: f64,
}

impl StageValues {
    pub fn total(&self) -> f64 {
        self.marketed + self.submitted + self.planned
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            marketed: self.marketed * factor,
            submitted: self.submitted * factor,
            planned: self.planned * factor,
        }
    }
}

// ==========================================
// SeriesGenerator - 序列生成器
// ==========================================
pub struct SeriesGenerator {
    profile: GrowthProfile,
}

impl SeriesGenerator {
    pub fn new(profile: GrowthProfile) -> Self {
        Self { profile }
    }

    /// 使用 canonical 预设
    pub fn canonical() -> Self {
        Self::new(GrowthProfile::default())
    }

    pub fn profile(&self) -> &GrowthProfile {
        &self.profile
    }

    /// 生成完整序列（start_year..=end_year）
    pub fn generate(&self) -> HousingSeries {
        let p = &self.profile;
        tracing::info!(
            start_year = p.start_year,
            end_year = p.end_year,
            scaling_guard = p.scaling_guard,
            "开始生成住房管线序列"
        );

        let mut data = Vec::with_capacity(p.year_count());
        let mut previous: Option<YearRecord> = None;

        for year in p.start_year..=p.end_year {
            let record = self.next_record(year, previous.as_ref());
            tracing::debug!(?record, "年度记录");
            data.push(record);
            previous = Some(record);
        }

        tracing::info!(records = data.len(), "序列生成完成");
        HousingSeries::new(data)
    }

    /// 由上一条记录计算当年记录
    ///
    /// # 参数
    /// - year: 当年
    /// - previous: 上一年记录（首年为 None）
    pub fn next_record(&self, year: i32, previous: Option<&YearRecord>) -> YearRecord {
        let required = self.required_at(year);
        let stages = self.guarded_stages(year, required);

        let marketed = truncate(stages.marketed);
        let built = match previous {
            None => truncate(marketed as f64 * self.profile.first_year_built_ratio),
            Some(prev) => truncate(prev.marketed as f64 * self.profile.built_ratio),
        };

        YearRecord {
            year,
            marketed,
            submitted: truncate(stages.submitted),
            planned: truncate(stages.planned),
            built,
            required: truncate(required),
        }
    }

    /// required 线性插值: base + (target - base) × (year - start) / (end - start)
    pub fn required_at(&self, year: i32) -> f64 {
        let p = &self.profile;
        let span = f64::from(p.end_year) - f64::from(p.start_year);
        let offset = f64::from(year) - f64::from(p.start_year);

        // 先乘后除，保证 end_year 精确落在 required_target 上
        p.required_base + (p.required_target - p.required_base) * offset / span
    }

    /// 未经缩放保护的三阶段值
    pub fn raw_stages(&self, year: i32) -> StageValues {
        let p = &self.profile;
        let marketed = p.marketed.value_at(year, p.start_year, p.pivot_year);
        let planned = p.planned.value_at(year, p.start_year, p.pivot_year);

        let submitted = match p.submitted {
            SubmittedModel::Blend { fraction } => planned + (marketed - planned) * fraction,
            SubmittedModel::Compound(curve) => curve.value_at(year, p.start_year, p.pivot_year),
        };

        StageValues {
            marketed,
            submitted,
            planned,
        }
    }

    /// 应用缩放保护后的三阶段值
    fn guarded_stages(&self, year: i32, required: f64) -> StageValues {
        let stages = self.raw_stages(year);
        let total = stages.total();

        if self.profile.scaling_guard && total > required {
            let factor = required / total;
            tracing::info!(year, total, required, factor, "管线合计超出目标，等比缩放");
            return stages.scaled(factor);
        }

        stages
    }
}

/// 向零截断（不四舍五入）
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GrowthCurve, GrowthPreset};

    #[test]
    fn test_required_endpoints() {
        let generator = SeriesGenerator::canonical();
        assert_eq!(generator.required_at(2025), 67273.0);
        assert_eq!(generator.required_at(2040), 250000.0);
    }

    #[test]
    fn test_first_year_record() {
        let generator = SeriesGenerator::canonical();
        let record = generator.next_record(2025, None);

        assert_eq!(record.year, 2025);
        assert_eq!(record.marketed, 35000);
        assert_eq!(record.planned, 2000);
        // 2000 + 33000 × 0.3
        assert_eq!(record.submitted, 11900);
        assert_eq!(record.built, 28000);
        assert_eq!(record.required, 67273);
    }

    #[test]
    fn test_built_uses_explicit_previous() {
        let generator = SeriesGenerator::canonical();
        let previous = YearRecord {
            year: 2025,
            marketed: 10000,
            submitted: 0,
            planned: 0,
            built: 0,
            required: 0,
        };

        let record = generator.next_record(2026, Some(&previous));
        assert_eq!(record.built, 8500);
    }

    #[test]
    fn test_blend_submitted_between_planned_and_marketed() {
        let generator = SeriesGenerator::canonical();
        for year in 2025..=2040 {
            let stages = generator.raw_stages(year);
            assert!(stages.planned <= stages.submitted);
            assert!(stages.submitted <= stages.marketed);
        }
    }

    #[test]
    fn test_scaling_guard_caps_total() {
        let profile = GrowthProfile {
            marketed: GrowthCurve::new(90000.0, 0.2, 0.1),
            ..GrowthProfile::default()
        };
        let generator = SeriesGenerator::new(profile);

        let record = generator.next_record(2025, None);
        assert!(record.pipeline_total() <= record.required);
        assert!(record.planned <= record.submitted);
        assert!(record.submitted <= record.marketed);
    }

    #[test]
    fn test_unguarded_preset_keeps_raw_values() {
        let profile = GrowthProfile {
            marketed: GrowthCurve::new(90000.0, 0.2, 0.1),
            ..GrowthPreset::Unguarded.profile()
        };
        let generator = SeriesGenerator::new(profile);

        let record = generator.next_record(2025, None);
        assert_eq!(record.marketed, 90000);
        assert!(record.pipeline_total() > record.required);
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(truncate(1.99), 1);
        assert_eq!(truncate(-1.99), -1);
    }
}
