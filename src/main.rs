use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::info;
use voicenotes::{Config, RecognizerConfig, ScriptedRecognizer, SessionController, StoreClient};

#[derive(Parser)]
#[command(name = "voicenotes", about = "Live dictation sessions backed by a transcript store")]
struct Cli {
    /// Configuration file (TOML, optional)
    #[arg(long, default_value = "config/voicenotes")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted dictation session, showing the live transcript
    Listen {
        /// Phrase for the scripted recognizer to dictate
        phrase: String,

        /// Delay between recognition events, in milliseconds
        #[arg(long, default_value_t = 150)]
        event_delay_ms: u64,

        /// Save the finished transcript to the store
        #[arg(long)]
        save: bool,
    },

    /// Print saved transcripts, most recent first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} starting", cfg.service.name);

    match cli.command {
        Command::Listen {
            phrase,
            event_delay_ms,
            save,
        } => listen(&cfg, &phrase, event_delay_ms, save).await,
        Command::List => list(&cfg).await,
    }
}

async fn listen(cfg: &Config, phrase: &str, event_delay_ms: u64, save: bool) -> Result<()> {
    let recognizer_config = RecognizerConfig {
        language: cfg.recognition.language.clone(),
        continuous: cfg.recognition.continuous,
        interim_results: cfg.recognition.interim_results,
    };

    let provider = ScriptedRecognizer::new(
        recognizer_config,
        ScriptedRecognizer::dictation_script(phrase),
    )
    .with_event_delay(Duration::from_millis(event_delay_ms));

    let mut controller =
        SessionController::new(Box::new(provider), StoreClient::new(&cfg.store.base_url));

    controller.open().await;
    if let Some(message) = controller.message() {
        println!("{}", message);
    }

    controller.start().await;

    // Rewrite the line in place while interim results revise themselves.
    while controller.pump().await {
        print!("\r{}", controller.transcript());
        std::io::Write::flush(&mut std::io::stdout()).ok();
    }
    println!();

    if let Some(message) = controller.message() {
        println!("{}", message);
    }

    if save {
        controller.save().await;
        if let Some(message) = controller.message() {
            println!("{}", message);
        }
    }

    controller.close().await;
    Ok(())
}

async fn list(cfg: &Config) -> Result<()> {
    let mut controller = SessionController::new(
        Box::new(ScriptedRecognizer::new(
            RecognizerConfig::default(),
            Vec::new(),
        )),
        StoreClient::new(&cfg.store.base_url),
    );

    controller.open().await;
    if let Some(message) = controller.message() {
        println!("{}", message);
    }

    if controller.saved().is_empty() {
        println!("No saved transcriptions yet.");
        return Ok(());
    }

    for record in controller.saved() {
        let stamp = record.timestamp.with_timezone(&Local);
        println!("[{}] {}", stamp.format("%Y-%m-%d %H:%M:%S"), record.text);
    }

    Ok(())
}
