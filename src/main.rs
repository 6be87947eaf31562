use clap::Parser;
use comment_sentiment::utils::{logger, validation::Validate};
use comment_sentiment::{
    AppConfig, CliConfig, InputValidator, LocalStorage, ResultPersister, SentimentClient,
    SentimentError, Session, WordSet,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Run failed ({:?}): {}", e.category(), e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), SentimentError> {
    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let config = AppConfig::from_file(&cli.config)?;
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let api_key = config.api_key()?;
    let words = WordSet::from_file(config.word_list_path())?;

    let client = match config.request_timeout() {
        Some(timeout) => {
            SentimentClient::with_timeout(config.api_url().to_string(), api_key, timeout)?
        }
        None => SentimentClient::new(config.api_url().to_string(), api_key),
    };

    let session = Session::new(
        InputValidator::new(config.validation_policy(), words),
        client,
        ResultPersister::new(LocalStorage::new(config.output_dir().to_string())),
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    session.run(&mut input, &mut output).await
}
