use axum::http::HeaderValue;
use nonzero_ext::nonzero;
use std::num::NonZeroU32;
use std::path::PathBuf;
use url::Url;

const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
const DEFAULT_MAIL_FROM: &str = "FrameState <onboarding@resend.dev>";
const DEFAULT_MEETING_LINK: &str = "https://meet.google.com/your-meeting-room";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read once at startup from the environment (after `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub resend_api_key: String,
    pub resend_api_url: Url,
    pub mail_from: String,
    /// Link handed out in the confirmation mail; `{room}` is replaced per request.
    pub meeting_link_template: String,
    pub frontend_origin: HeaderValue,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<sentry::types::Dsn>,
    pub meeting_requests_per_hour: NonZeroU32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset, same as a missing line in .env
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let resend_api_key = var("RESEND_API_KEY").ok_or(ConfigError::Missing("RESEND_API_KEY"))?;

        let raw_api_url = var("RESEND_API_URL").unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string());
        let resend_api_url = Url::parse(&raw_api_url).map_err(|_| ConfigError::Invalid {
            name: "RESEND_API_URL",
            value: raw_api_url.clone(),
        })?;

        let raw_origin = var("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_origin = raw_origin
            .trim_end_matches('/')
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::Invalid { name: "FRONTEND_URL", value: raw_origin.clone() })?;

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let sentry_dsn = match var("SENTRY_DSN") {
            Some(raw) => Some(
                raw.parse::<sentry::types::Dsn>()
                    .map_err(|_| ConfigError::Invalid { name: "SENTRY_DSN", value: raw })?,
            ),
            None => None,
        };

        let meeting_requests_per_hour = match var("MEETING_REQUESTS_PER_HOUR") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ConfigError::Invalid { name: "MEETING_REQUESTS_PER_HOUR", value: raw })?,
            None => nonzero!(3u32),
        };

        Ok(Self {
            resend_api_key,
            resend_api_url,
            mail_from: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            meeting_link_template: var("MEETING_LINK_TEMPLATE")
                .unwrap_or_else(|| DEFAULT_MEETING_LINK.to_string()),
            frontend_origin,
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            sentry_dsn,
            meeting_requests_per_hour,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_api_key_is_set() {
        let config = config_from(&[("RESEND_API_KEY", "re_test")]).unwrap();
        assert_eq!(config.resend_api_key, "re_test");
        assert_eq!(config.resend_api_url.as_str(), "https://api.resend.com/");
        assert_eq!(config.mail_from, DEFAULT_MAIL_FROM);
        assert_eq!(config.meeting_link_template, DEFAULT_MEETING_LINK);
        assert_eq!(config.frontend_origin, "http://localhost:8080");
        assert_eq!(config.port, 3000);
        assert!(config.static_dir.is_none());
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.meeting_requests_per_hour.get(), 3);
    }

    #[test]
    fn api_key_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RESEND_API_KEY")));

        let err = config_from(&[("RESEND_API_KEY", "   ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RESEND_API_KEY")));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = config_from(&[("RESEND_API_KEY", "k"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = config_from(&[("RESEND_API_KEY", "k"), ("MEETING_REQUESTS_PER_HOUR", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "MEETING_REQUESTS_PER_HOUR", .. }));
    }

    #[test]
    fn frontend_origin_drops_trailing_slash() {
        let config = config_from(&[
            ("RESEND_API_KEY", "k"),
            ("FRONTEND_URL", "https://framestatestudios.com/"),
            ("STATIC_DIR", "dist"),
        ])
        .unwrap();
        assert_eq!(config.frontend_origin, "https://framestatestudios.com");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }
}
