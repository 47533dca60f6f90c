//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::briefing::BriefingType;
use crate::domain::credential::{self, Credential};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::Unset { key } => handle_unset(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.trim().to_string()),
        "language" => config.language = Some(value.to_string()),
        "briefing_type" => config.briefing_type = Some(value.to_string()),
        "base_url" => config.base_url = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;

    let shown = if key == "api_key" {
        credential::mask(value.trim())
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| credential::mask(&s)),
        "language" => config.language,
        "briefing_type" => config.briefing_type,
        "base_url" => config.base_url,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_unset<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = None,
        "language" => config.language = None,
        "briefing_type" => config.briefing_type = None,
        "base_url" => config.base_url = None,
        _ => unreachable!(),
    }

    store.save(&config).await?;
    presenter.success(&format!("{} cleared", key));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| credential::mask(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("language", config.language.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "briefing_type",
        config.briefing_type.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("base_url", config.base_url.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" => {
            Credential::parse(value).map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }
        "language" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        "briefing_type" => {
            value
                .parse::<BriefingType>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "base_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must start with http:// or https://".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_api_key_requires_prefix() {
        assert!(validate_config_value("api_key", "sk-abc123").is_ok());
        assert!(validate_config_value("api_key", "abc123").is_err());
        assert!(validate_config_value("api_key", "").is_err());
    }

    #[test]
    fn validate_briefing_type() {
        assert!(validate_config_value("briefing_type", "daily-report").is_ok());
        assert!(validate_config_value("briefing_type", "meeting-minutes").is_ok());
        assert!(validate_config_value("briefing_type", "invalid").is_err());
    }

    #[test]
    fn validate_language_rejects_empty() {
        assert!(validate_config_value("language", "zh").is_ok());
        assert!(validate_config_value("language", "  ").is_err());
    }

    #[test]
    fn validate_base_url_requires_scheme() {
        assert!(validate_config_value("base_url", "https://api.siliconflow.cn/v1").is_ok());
        assert!(validate_config_value("base_url", "http://localhost:9000").is_ok());
        assert!(validate_config_value("base_url", "localhost:9000").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(validate_key("api_key").is_ok());
        assert!(validate_key("duration").is_err());
    }
}
