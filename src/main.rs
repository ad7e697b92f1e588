use anyhow::Context;
use clap::Parser;
use line_transformer::utils::{logger, validation::Validate};
use line_transformer::{
    CliConfig, LinePipeline, LocalStorage, PathPrompter, RunReport, TransformEngine,
    TransformerConfig,
};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    println!("Welcome to the File Processor! 🖋️");
    println!("This program reads a file, modifies its content, and writes to a new file.");
    println!("It also includes error handling for common file operations.");

    let max_attempts = cli.max_attempts.unwrap_or_else(|| config.max_attempts());
    let mut prompter =
        PathPrompter::new(io::stdin().lock(), io::stdout()).with_max_attempts(max_attempts);

    let paths = prompter
        .prompt_input_path()
        .and_then(|input| Ok((input, prompter.prompt_output_path()?)));
    let (input_path, output_path) = match paths {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!("Prompt ended without a usable answer: {}", e);
            eprintln!("\n❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let monitor_enabled = cli.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = LinePipeline::new(
        LocalStorage::default(),
        &input_path,
        &output_path,
        config.line_transform(),
    );
    let engine = TransformEngine::new_with_monitoring(pipeline, monitor_enabled);

    // 失敗已經由 reporter 顯示，流程照常結束
    if let Ok(report) = engine.run().await {
        if let Some(report_path) = config.report_path() {
            save_report(&report, report_path)?;
        }
    }

    println!("\nFile processing complete! 🎉");
    println!("Check '{}' for the modified content.", output_path.display());

    Ok(())
}

fn load_config(cli: &CliConfig) -> line_transformer::Result<TransformerConfig> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TransformerConfig::from_file(path)?
        }
        None => TransformerConfig::default(),
    };
    config.validate()?;

    Ok(config)
}

fn save_report(report: &RunReport, path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing run report")?;
    std::fs::write(path, json).with_context(|| format!("writing run report to '{}'", path))?;
    tracing::info!("📝 Run report saved to: {}", path);
    Ok(())
}
