//! Command runners for the voice-brief CLI

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::{
    GenerateBriefingUseCase, GenerateError, TranscribeAudioUseCase, TranscribeError,
};
use crate::domain::audio::{AudioClip, AudioFormat};
use crate::domain::briefing::{Briefing, BriefingRequest};
use crate::domain::config::AppConfig;
use crate::domain::failure::{ClassifiedError, ErrorKind};
use crate::domain::session::SessionState;
use crate::domain::transcription::Transcript;
use crate::infrastructure::{SiliconFlowGenerator, SiliconFlowTranscriber, XdgConfigStore};

use super::args::{BriefOptions, GenerateOptions, TranscribeOptions};
use super::presenter::Presenter;

/// Environment variable holding a pre-provisioned API key
pub const API_KEY_ENV: &str = "SILICONFLOW_API_KEY";

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the full audio-to-briefing pipeline
pub async fn run_brief(options: BriefOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut session = SessionState::new();

    if let Err(message) = authenticate(&mut session, &config) {
        presenter.error(&message);
        return ExitCode::from(EXIT_ERROR);
    }

    let clip = match load_clip(&options.audio, &presenter).await {
        Ok(clip) => clip,
        Err(code) => return code,
    };

    let transcriber = transcriber_for(&config).with_language(options.language.clone());
    let use_case = TranscribeAudioUseCase::new(transcriber);

    presenter.start_spinner(&format!("Transcribing ({})...", clip.human_readable_size()));
    let transcript = match use_case.execute(&mut session, &clip).await {
        Ok(transcript) => {
            presenter.spinner_success(&format!(
                "Transcribed {} characters",
                transcript.char_count()
            ));
            transcript
        }
        Err(error) => {
            presenter.spinner_fail("Transcription failed");
            return handle_transcribe_error(&presenter, &mut session, error);
        }
    };

    if transcript.is_blank() {
        presenter.warn("No speech recognized in the recording; nothing to brief");
        return ExitCode::from(EXIT_ERROR);
    }

    let request = BriefingRequest::new(transcript, options.briefing_type)
        .with_custom_instruction(options.requirement.unwrap_or_default());

    let generator = generator_for(&config);
    let use_case = GenerateBriefingUseCase::new(generator);

    presenter.start_spinner(&format!(
        "Generating {}...",
        options.briefing_type.label()
    ));
    let briefing = match use_case.execute(&mut session, &request).await {
        Ok(briefing) => {
            presenter.spinner_success("Briefing generated");
            briefing
        }
        Err(error) => {
            presenter.spinner_fail("Generation failed");
            return handle_generate_error(&presenter, &mut session, error);
        }
    };

    finish_briefing(&presenter, &briefing, options.output, options.no_export).await
}

/// Run transcription only, printing the transcript to stdout
pub async fn run_transcribe(options: TranscribeOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut session = SessionState::new();

    if let Err(message) = authenticate(&mut session, &config) {
        presenter.error(&message);
        return ExitCode::from(EXIT_ERROR);
    }

    let clip = match load_clip(&options.audio, &presenter).await {
        Ok(clip) => clip,
        Err(code) => return code,
    };

    let transcriber = transcriber_for(&config).with_language(options.language);
    let use_case = TranscribeAudioUseCase::new(transcriber);

    presenter.start_spinner(&format!("Transcribing ({})...", clip.human_readable_size()));
    match use_case.execute(&mut session, &clip).await {
        Ok(transcript) => {
            if transcript.is_blank() {
                presenter.stop_spinner();
                presenter.warn("No speech recognized in the recording");
            } else {
                presenter.spinner_success(&format!(
                    "Transcribed {} characters",
                    transcript.char_count()
                ));
                presenter.output(transcript.as_str());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(error) => {
            presenter.spinner_fail("Transcription failed");
            handle_transcribe_error(&presenter, &mut session, error)
        }
    }
}

/// Run generation from transcript text read from a file or stdin
pub async fn run_generate(options: GenerateOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut session = SessionState::new();

    if let Err(message) = authenticate(&mut session, &config) {
        presenter.error(&message);
        return ExitCode::from(EXIT_ERROR);
    }

    let transcript = match read_transcript(options.input.as_deref()).await {
        Ok(transcript) => transcript,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    session.set_transcript(transcript.clone());

    let request = BriefingRequest::new(transcript, options.briefing_type)
        .with_custom_instruction(options.requirement.unwrap_or_default());

    let generator = generator_for(&config);
    let use_case = GenerateBriefingUseCase::new(generator);

    presenter.start_spinner(&format!(
        "Generating {}...",
        options.briefing_type.label()
    ));
    let briefing = match use_case.execute(&mut session, &request).await {
        Ok(briefing) => {
            presenter.spinner_success("Briefing generated");
            briefing
        }
        Err(error) => {
            presenter.spinner_fail("Generation failed");
            return handle_generate_error(&presenter, &mut session, error);
        }
    };

    finish_briefing(&presenter, &briefing, options.output, options.no_export).await
}

/// Load and merge configuration: defaults < file < environment
pub async fn load_merged_config() -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    AppConfig::defaults().merge(file_config).merge(env_config)
}

/// Resolve the session credential: a pre-provisioned configuration value
/// first, then a credential already accepted into the session.
///
/// A session with no resolvable credential blocks every downstream call;
/// the returned message names the capture surface.
fn authenticate(session: &mut SessionState, config: &AppConfig) -> Result<(), String> {
    if let Some(candidate) = config.api_key.as_deref() {
        return session
            .accept_credential(candidate)
            .map_err(|e| format!("Invalid API key: {}", e));
    }

    if session.is_authenticated() {
        return Ok(());
    }

    Err(format!(
        "Missing API key. Set {} or run 'voice-brief config set api_key <key>'",
        API_KEY_ENV
    ))
}

/// Read an audio file into a clip, rejecting unsupported containers before
/// anything touches the network.
async fn load_clip(path: &Path, presenter: &Presenter) -> Result<AudioClip, ExitCode> {
    let format = match AudioFormat::from_path(path) {
        Ok(format) => format,
        Err(error) => {
            presenter.error(&error.to_string());
            return Err(ExitCode::from(EXIT_USAGE_ERROR));
        }
    };

    match tokio::fs::read(path).await {
        Ok(data) => Ok(AudioClip::new(data, format)),
        Err(error) => {
            presenter.error(&format!("Failed to read {}: {}", path.display(), error));
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Read transcript text from a file, or stdin when no file is given
async fn read_transcript(input: Option<&Path>) -> Result<Transcript, String> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            buffer
        }
    };
    Ok(Transcript::new(text))
}

/// Print the briefing and export it unless suppressed
async fn finish_briefing(
    presenter: &Presenter,
    briefing: &Briefing,
    output: Option<PathBuf>,
    no_export: bool,
) -> ExitCode {
    presenter.output(briefing.text());

    if no_export {
        return ExitCode::from(EXIT_SUCCESS);
    }

    let path = output.unwrap_or_else(|| PathBuf::from(briefing.file_name()));
    match tokio::fs::write(&path, briefing.text()).await {
        Ok(()) => {
            presenter.success(&format!("Saved to {}", path.display()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(error) => {
            presenter.error(&format!("Failed to write {}: {}", path.display(), error));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn handle_transcribe_error(
    presenter: &Presenter,
    session: &mut SessionState,
    error: TranscribeError,
) -> ExitCode {
    match error {
        TranscribeError::Failed(classified) => {
            handle_classified(presenter, session, &classified)
        }
        other => {
            presenter.error(&other.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn handle_generate_error(
    presenter: &Presenter,
    session: &mut SessionState,
    error: GenerateError,
) -> ExitCode {
    match error {
        GenerateError::Failed(classified) => handle_classified(presenter, session, &classified),
        other => {
            presenter.error(&other.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Show a classified failure. An auth failure additionally revokes the
/// session credential, forcing re-capture on the next run.
fn handle_classified(
    presenter: &Presenter,
    session: &mut SessionState,
    error: &ClassifiedError,
) -> ExitCode {
    presenter.classified_error(error);
    if error.kind == ErrorKind::Auth {
        session.revoke_credential();
    }
    ExitCode::from(EXIT_ERROR)
}

fn transcriber_for(config: &AppConfig) -> SiliconFlowTranscriber {
    match config.base_url.as_deref() {
        Some(base_url) => SiliconFlowTranscriber::with_base_url(base_url),
        None => SiliconFlowTranscriber::new(),
    }
}

fn generator_for(config: &AppConfig) -> SiliconFlowGenerator {
    match config.base_url.as_deref() {
        Some(base_url) => SiliconFlowGenerator::with_base_url(base_url),
        None => SiliconFlowGenerator::new(),
    }
}
