use anyhow::Context;
use clap::Parser;
use small_reminder::config::DEFAULT_JSON_PATH;
use small_reminder::utils::logger;
use small_reminder::{
    CliArgs, ConfigDefaults, DeliveryStatus, Dispatcher, RequestBuilder, SmtpMailer,
    TextbeltClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 裡放寄件帳號與 API 金鑰
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_file_logger(&args.log_file, args.verbose)
        .with_context(|| format!("opening log file {}", args.log_file))?;

    tracing::info!("Script started");
    tracing::info!(?args, "arguments");

    let json_path =
        std::env::var("JSON_PATH").unwrap_or_else(|_| DEFAULT_JSON_PATH.to_string());

    // 載入 JSON 預設值，失敗就提前結束
    let defaults = match ConfigDefaults::from_file(&json_path) {
        Ok(defaults) => {
            tracing::info!("{json_path} successfully loaded");
            defaults
        }
        Err(e) => {
            tracing::error!("failed to load config defaults: {e}");
            eprintln!("❌ {e}");
            eprintln!("💡 Make sure the file exists and is valid JSON");
            std::process::exit(1);
        }
    };

    // time/days are placeholders for a future cron config; log and move on
    if let Some(time) = defaults.schedule_time() {
        tracing::info!("schedule placeholder: time {time} (unused)");
    }
    if !defaults.schedule_days().is_empty() {
        tracing::info!("schedule placeholder: days {:?} (unused)", defaults.schedule_days());
    }

    let request = match RequestBuilder::new(&args, &defaults).build() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("failed to resolve the reminder request: {e}");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(?request, "resolved request");

    let mailer = SmtpMailer::from_env().context("SMTP relay configuration")?;
    let texter = TextbeltClient::from_env(args.live).context("SMS gateway configuration")?;
    if !args.live {
        tracing::info!("SMS gateway in test mode (no credits consumed)");
    }

    let dispatcher = Dispatcher::new(mailer, texter);
    let outcomes = dispatcher.dispatch(&request).await;

    let sent = outcomes.iter().filter(|o| o.is_sent()).count();
    let invalid = outcomes
        .iter()
        .filter(|o| matches!(o.status, DeliveryStatus::InvalidFormat))
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o.status, DeliveryStatus::TransportError(_)))
        .count();
    tracing::info!("dispatch summary: {sent} sent, {invalid} invalid, {failed} failed");

    // partial delivery is expected; the run still counts as completed
    println!("Done");
    tracing::info!("Script ended");

    Ok(())
}
