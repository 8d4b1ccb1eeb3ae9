use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";

/// Runtime configuration for the photo API connection.
///
/// `base_url` defaults to the public Pexels endpoint; `api_key` has no
/// default and must come from the config file or the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub api_key: String,
}

impl Settings {
    /// Load settings from `config/settings.yaml` (when present) layered
    /// under `PHOTOS_`-prefixed environment variables. A `.env` file is
    /// read first so local keys don't have to live in the shell profile.
    ///
    /// # Errors
    /// * If the config file exists but can't be parsed.
    /// * If no API key is configured anywhere.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .add_source(config::File::with_name("config/settings").required(false))
            .add_source(
                config::Environment::with_prefix("PHOTOS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_supplies_key_and_overrides_base_url() {
        std::env::set_var("PHOTOS_API_KEY", "env-key");
        std::env::set_var("PHOTOS_BASE_URL", "http://localhost:8080/v1");

        let settings = Settings::load().unwrap();
        assert_eq!(settings.api_key, "env-key");
        assert_eq!(settings.base_url, "http://localhost:8080/v1");

        std::env::remove_var("PHOTOS_API_KEY");
        std::env::remove_var("PHOTOS_BASE_URL");
    }

    #[test]
    #[serial]
    fn missing_api_key_fails_to_load() {
        std::env::remove_var("PHOTOS_API_KEY");
        std::env::remove_var("PHOTOS_BASE_URL");

        assert!(Settings::load().is_err());
    }

    #[test]
    #[serial]
    fn base_url_falls_back_to_the_public_endpoint() {
        std::env::set_var("PHOTOS_API_KEY", "env-key");
        std::env::remove_var("PHOTOS_BASE_URL");

        let settings = Settings::load().unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);

        std::env::remove_var("PHOTOS_API_KEY");
    }
}
