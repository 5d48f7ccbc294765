// ==========================================
// 生成 → 文件 → 校验 端到端测试
// ==========================================
// 测试目标: 生成器输出的文件必须通过校验器（零致命错误）
// ==========================================

mod test_helpers;

use housing_pipeline::config::{GrowthCurve, GrowthPreset, GrowthProfile, TargetBoundPolicy};
use housing_pipeline::engine::{SeriesAnalyzer, SeriesGenerator, SeriesValidator, ValidationErrorKind};
use housing_pipeline::{logging, store, Quantity};

#[test]
fn test_generated_file_passes_validation() {
    logging::init_test();
    let dir = tempfile::tempdir().expect("temp dir");
    let profile = GrowthProfile::default();
    let path = dir.path().join(profile.output_file_name());

    let series = SeriesGenerator::new(profile).generate();
    store::write_series(&path, &series).expect("write series");

    let report = SeriesValidator::new(TargetBoundPolicy::MarketedOnly).validate_file(&path);
    assert!(report.is_success(), "unexpected failure: {:?}", report.error());
    assert!(report.warnings.is_empty());

    let summary = report.summary().expect("summary");
    assert_eq!(summary.record_count, 16);
    assert_eq!(summary.first_year, 2025);
    assert_eq!(summary.last_year, 2040);
    assert_eq!(summary.final_record.required, Quantity::Int(250000));
}

#[test]
fn test_all_presets_pass_strict_policy() {
    logging::init_test();
    let validator = SeriesValidator::new(TargetBoundPolicy::PerComponentAndSum);

    for preset in GrowthPreset::ALL {
        let series = SeriesGenerator::new(preset.profile()).generate();
        let report = validator.validate_series(&series);
        assert!(
            report.is_success(),
            "{} failed: {:?}",
            preset,
            report.error()
        );
    }
}

#[test]
fn test_unguarded_overflow_caught_by_validator() {
    let profile = GrowthProfile {
        marketed: GrowthCurve::new(90000.0, 0.12, 0.06),
        ..GrowthPreset::Unguarded.profile()
    };
    let series = SeriesGenerator::new(profile).generate();

    let report = SeriesValidator::default().validate_series(&series);
    let err = report.error().expect("overflow must be rejected");
    assert_eq!(err.kind(), ValidationErrorKind::Bound);
    assert_eq!(err.year(), Some(2025));
}

#[test]
fn test_read_back_matches_generated() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("series.json");
    let series = test_helpers::canonical_series();

    store::write_series(&path, &series).expect("write");
    assert_eq!(store::read_series(&path).expect("read"), series);
}

#[test]
fn test_csv_export_has_row_per_year() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("housingData2025-2040.csv");
    let series = test_helpers::canonical_series();

    store::export_csv(&path, &series, "en").expect("export");

    let text = std::fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = text.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines.len(), 17, "header + 16 rows");
    assert!(lines[0].starts_with("Year,"));
    assert!(lines[1].starts_with("2025,35000,11900,2000,28000,67273"));
    assert!(lines[16].starts_with("2040,"));
}

#[test]
fn test_analysis_of_generated_series() {
    let series = test_helpers::canonical_series();
    let analysis = SeriesAnalyzer::new().analyze(&series);

    assert_eq!(analysis.len(), 16);
    assert!(analysis[0].changes.is_empty());
    assert!(analysis.iter().all(|a| a.gap_to_target >= 0));
    assert!(analysis[1..].iter().all(|a| !a.changes.is_empty()));
}
