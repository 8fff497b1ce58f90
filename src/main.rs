use clap::Parser;
use event_status::utils::error::EventStatusError;
use event_status::utils::{logger, validation::Validate};
use event_status::{check_last_event_status, CliConfig, TomlConfig};

fn load_config_file(cli: &CliConfig) -> Result<TomlConfig, EventStatusError> {
    let file = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    file.validate()?;
    Ok(file)
}

fn report_failure(stage: &str, e: &EventStatusError) {
    tracing::error!(
        "{} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 設定檔中的日誌等級需在初始化日誌前讀取
    let file = load_config_file(&cli);
    let level = file.as_ref().ok().and_then(|file| file.log_level());
    if cli.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let file = match cli.validate().and(file) {
        Ok(file) => file,
        Err(e) => {
            report_failure("Configuration", &e);
            std::process::exit(1);
        }
    };

    match check_last_event_status(&cli, &file).await {
        Ok(report) => {
            tracing::info!(group_id = %report.group_id, status = %report.status, "last event classified");
            if cli.json {
                match serde_json::to_string(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        report_failure("Report serialization", &EventStatusError::from(e));
                        std::process::exit(2);
                    }
                }
            } else {
                println!("{}", report.status);
            }
        }
        Err(e) => {
            report_failure("Classification", &e);
            std::process::exit(2);
        }
    }

    Ok(())
}
