// ==========================================
// 住房供给管线数据 - 同比分析
// ==========================================
// 职责: 年度变化量 / 变化幅度分级 / 距目标缺口 / 阶段占比
// 阈值: marketed 1000/5000, submitted 500/2000, planned 500/2000, built 1000/5000
// required 不做变化分级
// ==========================================

use crate::domain::{ChangeDirection, ChangeLevel, HousingSeries, SeriesKind, YearRecord};
use serde::Serialize;

// ==========================================
// ChangeThresholds - 变化幅度阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeThresholds {
    pub significant: i64,
    pub major: i64,
}

impl ChangeThresholds {
    pub const fn new(significant: i64, major: i64) -> Self {
        Self { significant, major }
    }

    /// 按该指标的默认阈值（required 无阈值）
    pub fn for_kind(kind: SeriesKind) -> Option<Self> {
        match kind {
            SeriesKind::Marketed | SeriesKind::Built => Some(Self::new(1000, 5000)),
            SeriesKind::Submitted | SeriesKind::Planned => Some(Self::new(500, 2000)),
            SeriesKind::Required => None,
        }
    }

    pub fn classify(&self, delta: i64) -> ChangeLevel {
        let magnitude = delta.abs();
        if magnitude >= self.major {
            ChangeLevel::Major
        } else if magnitude >= self.significant {
            ChangeLevel::Significant
        } else {
            ChangeLevel::Neutral
        }
    }
}

/// 当前值与上一值之差（无上一值时为 None）
pub fn change(current: i64, previous: Option<i64>) -> Option<i64> {
    previous.map(|prev| current - prev)
}

// ==========================================
// 分析结果
// ==========================================

/// 单个指标的同比变化
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesChange {
    pub kind: SeriesKind,
    pub delta: i64,
    pub direction: ChangeDirection,
    pub level: ChangeLevel,
}

/// 单年分析
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearAnalysis {
    pub year: i32,
    /// 首年为空
    pub changes: Vec<SeriesChange>,
    pub pipeline_total: i64,
    /// required - pipeline_total
    pub gap_to_target: i64,
    /// (阶段, 占 pipeline_total 的百分比)
    pub stage_shares: Vec<(SeriesKind, f64)>,
}

impl YearAnalysis {
    pub fn change_of(&self, kind: SeriesKind) -> Option<&SeriesChange> {
        self.changes.iter().find(|c| c.kind == kind)
    }
}

// ==========================================
// SeriesAnalyzer - 序列分析器
// ==========================================
#[derive(Debug, Default)]
pub struct SeriesAnalyzer;

impl SeriesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 逐年分析
    pub fn analyze(&self, series: &HousingSeries) -> Vec<YearAnalysis> {
        let mut result = Vec::with_capacity(series.len());
        let mut previous: Option<&YearRecord> = None;

        for record in &series.data {
            result.push(self.analyze_year(record, previous));
            previous = Some(record);
        }

        result
    }

    /// 单年分析（上一年显式传入）
    pub fn analyze_year(&self, record: &YearRecord, previous: Option<&YearRecord>) -> YearAnalysis {
        let changes = SeriesKind::ALL
            .iter()
            .filter_map(|&kind| {
                let thresholds = ChangeThresholds::for_kind(kind)?;
                let delta = change(record.value(kind), previous.map(|p| p.value(kind)))?;
                Some(SeriesChange {
                    kind,
                    delta,
                    direction: ChangeDirection::of(delta),
                    level: thresholds.classify(delta),
                })
            })
            .collect();

        let pipeline_total = record.pipeline_total();
        let stage_shares = SeriesKind::PIPELINE
            .iter()
            .map(|&kind| {
                let share = if pipeline_total > 0 {
                    record.value(kind) as f64 / pipeline_total as f64 * 100.0
                } else {
                    0.0
                };
                (kind, share)
            })
            .collect();

        YearAnalysis {
            year: record.year,
            changes,
            pipeline_total,
            gap_to_target: record.gap_to_target(),
            stage_shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, marketed: i64, submitted: i64, planned: i64, built: i64) -> YearRecord {
        YearRecord {
            year,
            marketed,
            submitted,
            planned,
            built,
            required: 100000,
        }
    }

    #[test]
    fn test_change() {
        assert_eq!(change(10, None), None);
        assert_eq!(change(10, Some(4)), Some(6));
        assert_eq!(change(4, Some(10)), Some(-6));
    }

    #[test]
    fn test_classify_thresholds() {
        let t = ChangeThresholds::for_kind(SeriesKind::Marketed).unwrap();
        assert_eq!(t.classify(999), ChangeLevel::Neutral);
        assert_eq!(t.classify(1000), ChangeLevel::Significant);
        assert_eq!(t.classify(-5000), ChangeLevel::Major);

        let t = ChangeThresholds::for_kind(SeriesKind::Planned).unwrap();
        assert_eq!(t.classify(600), ChangeLevel::Significant);
        assert!(ChangeThresholds::for_kind(SeriesKind::Required).is_none());
    }

    #[test]
    fn test_first_year_has_no_changes() {
        let analyzer = SeriesAnalyzer::new();
        let a = analyzer.analyze_year(&record(2025, 35000, 11900, 2000, 28000), None);
        assert!(a.changes.is_empty());
        assert_eq!(a.pipeline_total, 48900);
        assert_eq!(a.gap_to_target, 100000 - 48900);
    }

    #[test]
    fn test_series_changes() {
        let series = HousingSeries::new(vec![
            record(2025, 35000, 11900, 2000, 28000),
            record(2026, 39200, 13200, 2160, 29750),
        ]);
        let analysis = SeriesAnalyzer::new().analyze(&series);

        assert_eq!(analysis.len(), 2);
        let second = &analysis[1];
        assert_eq!(second.changes.len(), 4);

        let marketed = second.change_of(SeriesKind::Marketed).unwrap();
        assert_eq!(marketed.delta, 4200);
        assert_eq!(marketed.direction, ChangeDirection::Up);
        assert_eq!(marketed.level, ChangeLevel::Significant);

        let planned = second.change_of(SeriesKind::Planned).unwrap();
        assert_eq!(planned.level, ChangeLevel::Neutral);
        assert!(second.change_of(SeriesKind::Required).is_none());

        let share_sum: f64 = second.stage_shares.iter().map(|(_, s)| s).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }
}
