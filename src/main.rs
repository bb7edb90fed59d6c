use anyhow::Context;
use clap::Parser;
use prompt_enhancer::config::cli::LogFormat;
use prompt_enhancer::ui::render;
use prompt_enhancer::utils::{
    logger,
    validation::{validate_required_field, Validate},
};
use prompt_enhancer::{
    fallback, CliConfig, EnhanceError, EnhancementClient, EnhancementRequest, EnhancementResult,
    ServiceConfig, ToastStore, TomlConfig,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先載入設定檔，日誌等級可能來自檔案
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    let json_logs = match cli.log_format {
        Some(format) => format == LogFormat::Json,
        None => file_config.json_logs(),
    };
    if json_logs {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    let service = ServiceConfig::from_env().merge(&file_config).merge(&cli);
    tracing::debug!("Service endpoint: {}, model: {}", service.endpoint, service.model);
    if let Err(e) = file_config.validate().and_then(|_| service.validate()) {
        exit_with(&e);
    }

    let input = read_input(&cli)?;
    if input.trim().is_empty() {
        eprintln!("❌ Nothing to enhance: pass the text as an argument or on stdin");
        std::process::exit(1);
    }

    let toasts = ToastStore::with_defaults(file_config.toast_defaults());

    let outcome = if cli.offline {
        tracing::info!("📴 Offline mode, rendering local template");
        Ok(EnhancementResult {
            enhanced: fallback(&input),
            original: input,
        })
    } else {
        let credential = cli
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| service.has_api_key().then(|| service.api_key.clone()));
        if let Err(e) = validate_required_field("api_key", &credential) {
            exit_with(&e);
        }

        tracing::info!("🚀 Enhancing prompt with model {}", service.model);
        let client = EnhancementClient::new(service);
        let mut request = EnhancementRequest::new(input);
        if let Some(key) = cli.api_key.clone() {
            request = request.with_api_key(key);
        }
        client.enhance(&request).await
    };

    match outcome {
        Ok(result) => {
            toasts.success("Prompt enhanced", None);
            render::flush_to_stderr(&toasts.toasts());

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.enhanced);
            }
            toasts.dispose();
            Ok(())
        }
        Err(e) => {
            toasts.error("Enhancement failed", Some(e.user_friendly_message()));
            render::flush_to_stderr(&toasts.toasts());
            exit_with(&e);
        }
    }
}

fn read_input(cli: &CliConfig) -> anyhow::Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read input from stdin")?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn exit_with(e: &EnhanceError) -> ! {
    tracing::error!("❌ {} (kind: {})", e, e.kind());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    if e.is_config_error() {
        eprintln!("❌ {}", e.user_friendly_message());
    }
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
