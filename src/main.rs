//! VoiceBrief CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voice_brief::cli::{
    app::{load_merged_config, run_brief, run_generate, run_transcribe, EXIT_ERROR},
    args::{BriefOptions, Cli, Commands, GenerateOptions, TranscribeOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voice_brief::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Brief {
            audio,
            briefing_type,
            requirement,
            output,
            no_export,
            language,
        } => {
            let config = load_merged_config().await;
            let options = BriefOptions {
                audio,
                briefing_type: briefing_type
                    .map(Into::into)
                    .unwrap_or_else(|| config.briefing_type_or_default()),
                requirement,
                output,
                no_export,
                language: language.unwrap_or_else(|| config.language_or_default().to_string()),
            };
            run_brief(options, config).await
        }
        Commands::Transcribe { audio, language } => {
            let config = load_merged_config().await;
            let options = TranscribeOptions {
                audio,
                language: language.unwrap_or_else(|| config.language_or_default().to_string()),
            };
            run_transcribe(options, config).await
        }
        Commands::Generate {
            input,
            briefing_type,
            requirement,
            output,
            no_export,
        } => {
            let config = load_merged_config().await;
            let options = GenerateOptions {
                input,
                briefing_type: briefing_type
                    .map(Into::into)
                    .unwrap_or_else(|| config.briefing_type_or_default()),
                requirement,
                output,
                no_export,
            };
            run_generate(options, config).await
        }
    }
}
