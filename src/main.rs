use clap::Parser;
use http_smoke::utils::{logger, validation::Validate};
use http_smoke::{
    render, CliConfig, HttpFetcher, OutputFormat, ProbeEngine, ProbeSettings, Result, TomlConfig,
};

fn load_settings(config: &CliConfig) -> Result<ProbeSettings> {
    config.validate()?;

    // 載入設定檔 (若有指定)
    let file_config = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config
        }
        None => TomlConfig::default(),
    };

    Ok(ProbeSettings::from_layers(&[config, &file_config]))
}

async fn probe(settings: &ProbeSettings) -> Result<()> {
    let engine = ProbeEngine::new(HttpFetcher::new());
    let outcome = engine.run(&settings.to_request()).await?;

    let stdout = std::io::stdout();
    render(&outcome, settings.format, &mut stdout.lock())?;
    Ok(())
}

fn exit_with(e: http_smoke::SmokeError) -> ! {
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    let settings = load_settings(&config).unwrap_or_else(|e| exit_with(e));

    // 初始化日誌 (依合併後的輸出格式)
    match settings.format {
        OutputFormat::Json => logger::init_json_logger(config.verbose),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = probe(&settings).await {
        exit_with(e);
    }
}
