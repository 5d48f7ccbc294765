// Validate a housing pipeline series file.
//
// Usage:
//   cargo run --bin validate_housing_data -- [path] [--strict | --policy marketed_only|strict] [--lang en|he]
//
// Exit codes: 0 validation passed, 1 validation or parse failure, 2 CLI error.

use housing_pipeline::config::ValidateOptions;
use housing_pipeline::engine::{SeriesSummary, SeriesValidator};
use housing_pipeline::i18n::{self, format_quantity, t, t_with_args};
use housing_pipeline::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let options = match ValidateOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", t_with_args("cli.error", &[("message", e.to_string().as_str())]));
            eprintln!("{}", ValidateOptions::usage());
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{}", ValidateOptions::usage());
        return ExitCode::SUCCESS;
    }

    if let Some(locale) = &options.locale {
        i18n::set_locale(locale);
    }

    let path = options.input_path();
    tracing::info!(path = %path.display(), policy = %options.policy, "开始校验");

    let report = SeriesValidator::new(options.policy).validate_file(&path);

    for warning in &report.warnings {
        println!(
            "{}",
            t_with_args("validate.warning", &[("message", warning.to_string().as_str())])
        );
    }

    match &report.outcome {
        Ok(summary) => {
            print_summary(summary, report.warnings.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", t_with_args("validate.error", &[("message", e.to_string().as_str())]));
            ExitCode::from(1)
        }
    }
}

fn print_summary(summary: &SeriesSummary, warning_count: usize) {
    let last = &summary.final_record;

    println!("{}", t("validate.passed"));
    println!();
    println!("{}", t("validate.summary"));
    println!(
        "{}",
        t_with_args("validate.total_years", &[("count", summary.record_count.to_string().as_str())])
    );
    println!(
        "{}",
        t_with_args("validate.first_year", &[("year", summary.first_year.to_string().as_str())])
    );
    println!(
        "{}",
        t_with_args("validate.last_year", &[("year", summary.last_year.to_string().as_str())])
    );

    for (key, value) in [
        ("validate.final_marketed", last.marketed),
        ("validate.final_submitted", last.submitted),
        ("validate.final_planned", last.planned),
        ("validate.final_built", last.built),
        ("validate.final_required", last.required),
        ("validate.final_gap", summary.final_gap()),
    ] {
        println!("{}", t_with_args(key, &[("value", format_quantity(value).as_str())]));
    }

    if warning_count > 0 {
        println!(
            "{}",
            t_with_args("validate.warnings_count", &[("count", warning_count.to_string().as_str())])
        );
    }
}
