use clap::Parser;
use edu_guide::app::report;
use edu_guide::config::OutputFormat;
use edu_guide::utils::error::{ErrorSeverity, GuideError};
use edu_guide::utils::{logger, validation::Validate};
use edu_guide::{Advisor, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting edu-guide");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &CliConfig) -> Result<(), GuideError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    let advisor = Advisor::from_config(&config);

    if let Some(field) = &cli.career_path {
        return show_career_path(&advisor, field, cli.format);
    }

    let profile = cli.profile()?;
    let recommendations = advisor.recommend(&profile, None)?;

    let output = match cli.format {
        OutputFormat::Json => report::to_json(&recommendations)?,
        OutputFormat::Csv => report::to_csv(&recommendations)?,
    };
    println!("{}", output);

    if cli.save {
        let result_id = advisor.save(&profile, &recommendations, None).await?;
        tracing::info!("📁 Result id: {}", result_id);
        eprintln!("📁 Result id: {}", result_id);
    }

    Ok(())
}

fn show_career_path(advisor: &Advisor, field: &str, format: OutputFormat) -> Result<(), GuideError> {
    let Some(path) = advisor.career_path(field) else {
        let known: Vec<&str> = advisor.career_fields().collect();
        return Err(GuideError::ValidationError {
            message: format!(
                "No career path for '{}'. Known fields: {}",
                field,
                known.join(", ")
            ),
        });
    };

    let output = match format {
        OutputFormat::Json => report::career_path_to_json(path)?,
        OutputFormat::Csv => report::career_path_to_csv(path)?,
    };
    println!("{}", output);
    Ok(())
}
