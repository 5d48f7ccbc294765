// Regenerate the housing pipeline series and overwrite the fixed output file.
//
// Usage:
//   cargo run --bin generate_housing_data -- [--preset NAME] [--profile FILE] [--output PATH] [--csv PATH] [--lang en|he]
//
// With no arguments the canonical preset is written to housingData2025-2040.json.

use anyhow::Context;
use housing_pipeline::config::GenerateOptions;
use housing_pipeline::engine::SeriesGenerator;
use housing_pipeline::{i18n, logging, store};

fn main() -> anyhow::Result<()> {
    logging::init();

    let options = match GenerateOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", i18n::t_with_args("cli.error", &[("message", e.to_string().as_str())]));
            eprintln!("{}", GenerateOptions::usage());
            std::process::exit(2);
        }
    };

    if options.help {
        println!("{}", GenerateOptions::usage());
        return Ok(());
    }

    if let Some(locale) = &options.locale {
        i18n::set_locale(locale);
    }

    let profile = options
        .resolve_profile()
        .context("failed to resolve growth profile")?;
    match &options.profile_path {
        Some(path) => tracing::info!(profile = %path.display(), "使用自定义增长参数"),
        None => tracing::info!(preset = %options.preset, "使用增长预设"),
    }

    let series = SeriesGenerator::new(profile.clone()).generate();

    let output = options.output_path(&profile);
    store::write_series(&output, &series)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if let Some(csv_path) = &options.csv {
        store::export_csv(csv_path, &series, &i18n::current_locale())
            .with_context(|| format!("failed to export {}", csv_path.display()))?;
        println!(
            "{}",
            i18n::t_with_args("generate.csv_written", &[("path", csv_path.display().to_string().as_str())])
        );
    }

    println!(
        "{}",
        i18n::t_with_args(
            "generate.written",
            &[
                ("path", output.display().to_string().as_str()),
                ("count", series.len().to_string().as_str()),
            ],
        )
    );
    Ok(())
}
