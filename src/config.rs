use crate::utils::errors::{AcmLookupError, Result};
use crate::utils::paths::{expand_tilde, AcmLookupPaths};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Static credentials read from the environment
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &"***")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

fn redact(value: &str) -> String {
    format!("{}***", value.get(..4).unwrap_or(""))
}

/// Optional YAML config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub max_items: Option<u32>,
}

impl ConfigFile {
    /// Load the file at `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AcmLookupError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: ConfigFile = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct AcmSettings {
    pub region: String,
    pub endpoint: Option<String>,
    pub credentials: Credentials,
    pub max_items: Option<u32>,
}

impl AcmSettings {
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://acm.{}.amazonaws.com", self.region),
        }
    }
}

/// Values given on the command line (or through their env aliases)
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_path: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// Layer overrides over the config file and read credentials through `env`
pub fn resolve_settings<F>(
    file: ConfigFile,
    overrides: SettingsOverrides,
    env: F,
) -> Result<AcmSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let region = non_empty(overrides.region)
        .or_else(|| non_empty(env("AWS_DEFAULT_REGION")))
        .or_else(|| non_empty(file.region))
        .ok_or_else(|| {
            AcmLookupError::Config(
                "No region configured (use --region, AWS_REGION or the config file)".to_string(),
            )
        })?;

    let endpoint = non_empty(overrides.endpoint).or_else(|| non_empty(file.endpoint));

    let access_key_id = non_empty(env("AWS_ACCESS_KEY_ID"))
        .ok_or_else(|| AcmLookupError::Config("AWS_ACCESS_KEY_ID is not set".to_string()))?;
    let secret_access_key = non_empty(env("AWS_SECRET_ACCESS_KEY"))
        .ok_or_else(|| AcmLookupError::Config("AWS_SECRET_ACCESS_KEY is not set".to_string()))?;
    let session_token = non_empty(env("AWS_SESSION_TOKEN"));

    Ok(AcmSettings {
        region,
        endpoint,
        credentials: Credentials {
            access_key_id,
            secret_access_key,
            session_token,
        },
        max_items: file.max_items,
    })
}

/// Load settings from the config file, the overrides and the process environment
pub fn load_settings(overrides: SettingsOverrides) -> Result<AcmSettings> {
    let path = match &overrides.config_path {
        Some(path) => expand_tilde(path)?,
        None => AcmLookupPaths::config_file()?,
    };
    let file = ConfigFile::load(&path)?;
    let settings = resolve_settings(file, overrides, |key| std::env::var(key).ok())?;
    tracing::debug!(
        "Using region {} at {}",
        settings.region,
        settings.endpoint_url()
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const CREDS: &[(&str, &str)] = &[
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
    ];

    #[test]
    fn test_flag_region_overrides_file() {
        let file = ConfigFile {
            region: Some("eu-west-1".to_string()),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        };
        let settings = resolve_settings(file, overrides, env_with(CREDS)).unwrap();
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.endpoint_url(), "https://acm.us-east-1.amazonaws.com");
        assert!(settings.credentials.session_token.is_none());
    }

    #[test]
    fn test_default_region_env_then_file() {
        let file = ConfigFile {
            region: Some("eu-west-1".to_string()),
            endpoint: Some("http://localhost:4566/".to_string()),
            max_items: Some(50),
        };
        let mut env = CREDS.to_vec();
        env.push(("AWS_DEFAULT_REGION", "ap-south-1"));
        let settings =
            resolve_settings(file.clone(), SettingsOverrides::default(), env_with(&env)).unwrap();
        assert_eq!(settings.region, "ap-south-1");
        assert_eq!(settings.endpoint_url(), "http://localhost:4566");
        assert_eq!(settings.max_items, Some(50));

        let settings =
            resolve_settings(file, SettingsOverrides::default(), env_with(CREDS)).unwrap();
        assert_eq!(settings.region, "eu-west-1");
    }

    #[test]
    fn test_missing_region_or_credentials() {
        let err = resolve_settings(
            ConfigFile::default(),
            SettingsOverrides::default(),
            env_with(CREDS),
        )
        .unwrap_err();
        assert!(matches!(err, AcmLookupError::Config(_)));

        let overrides = SettingsOverrides {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        };
        let err = resolve_settings(
            ConfigFile::default(),
            overrides,
            env_with(&[("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("AWS_SECRET_ACCESS_KEY"));
    }

    #[test]
    fn test_config_file_yaml() {
        let config: ConfigFile =
            serde_yaml::from_str("region: us-west-2\nmax_items: 200\n").unwrap();
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert_eq!(config.max_items, Some(200));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let path = std::env::temp_dir().join("acm-lookup-does-not-exist.yaml");
        assert_eq!(ConfigFile::load(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "topsecret".to_string(),
            session_token: Some("token".to_string()),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("AKIDEXAMPLE"));
        assert!(debug.contains("AKID***"));
    }
}
