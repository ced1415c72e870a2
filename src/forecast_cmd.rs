use anyhow::{Context, Result};
use tracing::info;

use mentor_arima::SelectionConfig;
use mentor_forecast::{ForecastOptions, forecast};
use mentor_interval::CiMethod;

use crate::cli::ForecastArgs;
use crate::config::MentorConfig;
use crate::input;

/// Run the forecast pipeline on a score file and print the result as JSON.
pub fn run(args: &ForecastArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => MentorConfig::load(path)?,
        None => MentorConfig::default(),
    };

    let scores = input::read_scores(&args.scores)?;
    info!(
        path = %args.scores.display(),
        n = scores.len(),
        "scores loaded"
    );

    let options = build_options(&config, args)?;
    let result = forecast(&scores, &options)
        .with_context(|| format!("forecast failed for {}", args.scores.display()))?;

    let json = serde_json::to_string_pretty(&result).context("failed to serialise result")?;
    println!("{json}");
    Ok(())
}

/// Merge config-file values with CLI overrides into runtime options.
fn build_options(config: &MentorConfig, args: &ForecastArgs) -> Result<ForecastOptions> {
    let method_tag = args.method.as_deref().unwrap_or(&config.forecast.method);
    let method: CiMethod = method_tag.parse()?;

    let selection = SelectionConfig::new()
        .with_max_p(config.selection.max_p)
        .with_max_d(config.selection.max_d)
        .with_max_q(config.selection.max_q);

    Ok(ForecastOptions::new()
        .with_window(args.window.unwrap_or(config.forecast.window))
        .with_method(method)
        .with_threshold(args.threshold.unwrap_or(config.forecast.threshold))
        .with_selection(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bare_args() -> ForecastArgs {
        ForecastArgs {
            scores: PathBuf::from("scores.txt"),
            config: None,
            window: None,
            method: None,
            threshold: None,
        }
    }

    #[test]
    fn config_values_flow_into_options() {
        let config: MentorConfig = toml::from_str(
            r#"
            [forecast]
            window = 8
            method = "normal_distribution"
            threshold = 0.8
            "#,
        )
        .unwrap();
        let options = build_options(&config, &bare_args()).unwrap();
        assert_eq!(options.window(), 8);
        assert_eq!(options.method(), CiMethod::NormalDistribution);
        assert_eq!(options.threshold(), 0.8);
    }

    #[test]
    fn cli_overrides_beat_config() {
        let config = MentorConfig::default();
        let mut args = bare_args();
        args.window = Some(12);
        args.method = Some("arima_distribution".to_string());
        args.threshold = Some(0.95);
        let options = build_options(&config, &args).unwrap();
        assert_eq!(options.window(), 12);
        assert_eq!(options.method(), CiMethod::ArimaDistribution);
        assert_eq!(options.threshold(), 0.95);
    }

    #[test]
    fn bad_method_tag_is_an_error() {
        let config = MentorConfig::default();
        let mut args = bare_args();
        args.method = Some("bogus_distribution".to_string());
        assert!(build_options(&config, &args).is_err());
    }
}
