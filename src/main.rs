use async_posts::utils::{logger, validation::Validate};
use async_posts::{CliConfig, Driver, ScenarioOutcome};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting async-posts demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let driver = Driver::from_config(&config);

    let reports = driver.run(cli.scenario).await;
    let mut failed = 0;

    for report in reports {
        match report.outcome {
            Ok(ScenarioOutcome::Rendered(html)) => {
                println!("[{:?}] {}", report.scenario, html)
            }
            Ok(ScenarioOutcome::Fetched(users)) => {
                println!("[{:?}] {}", report.scenario, serde_json::to_string_pretty(&users)?)
            }
            Ok(ScenarioOutcome::Settled(values)) => {
                println!("[{:?}] {}", report.scenario, serde_json::to_string(&values)?)
            }
            Err(e) => {
                failed += 1;
                eprintln!("❌ [{:?}] {}", report.scenario, e);
            }
        }
    }

    if failed > 0 {
        tracing::error!("❌ {} scenario(s) failed", failed);
        std::process::exit(2);
    }
    tracing::info!("✅ Demo completed");

    Ok(())
}
