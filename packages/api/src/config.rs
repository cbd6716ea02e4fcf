//! Backend configuration.
//!
//! Natively the base URL is layered from defaults, an optional `notes.toml` in
//! the working directory, and `NOTES_*` environment variables (a `.env` file is
//! honoured). In the browser there is no process environment, so the value is
//! taken from `NOTES_API_BASE_URL` at compile time instead.
//!
//! ```toml
//! api_base_url = "https://notes.example.com"
//! ```

use serde::{Deserialize, Serialize};

/// Well-known name of the optional configuration file.
pub const CONFIG_FILE: &str = "notes.toml";

/// Prefix of the environment variables read by [`ApiConfig::load`].
pub const ENV_PREFIX: &str = "NOTES";

/// Where the notes backend lives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root address of the backend, e.g. `https://notes.example.com`.
    #[serde(default, alias = "apiBaseUrl")]
    pub api_base_url: String,
}

// Both spellings may be present at once (file vs. environment), which a serde
// alias on `ApiConfig` rejects as a duplicate field.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Deserialize)]
struct LayeredConfig {
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default, rename = "apiBaseUrl")]
    api_base_url_camel: Option<String>,
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Load the configuration from `notes.toml` and `NOTES_*` environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ::config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(std::path::Path::new(CONFIG_FILE), ENV_PREFIX)
    }

    /// Layer an optional TOML file under environment variables with the given prefix.
    ///
    /// The file may spell the key `api_base_url` or `apiBaseUrl`; environment
    /// variables always arrive as `api_base_url` and take precedence.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(
        file: &std::path::Path,
        env_prefix: &str,
    ) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config, Environment, File, FileFormat};

        let settings = Config::builder()
            .add_source(File::from(file).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        let layered: LayeredConfig = settings.try_deserialize()?;
        Ok(Self::new(
            layered
                .api_base_url
                .or(layered.api_base_url_camel)
                .unwrap_or_default(),
        ))
    }

    /// Load the configuration baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, std::convert::Infallible> {
        Ok(Self::new(option_env!("NOTES_API_BASE_URL").unwrap_or_default()))
    }

    /// `GET` endpoint returning every note.
    pub fn notes_endpoint(&self) -> String {
        self.endpoint("allNotes")
    }

    /// `POST` endpoint accepting a new note.
    pub fn add_note_endpoint(&self) -> String {
        self.endpoint("addNote")
    }

    // No validation here: a bad base URL surfaces as a request error.
    fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.strip_suffix('/').unwrap_or(&self.api_base_url);
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_endpoints() {
        let config = ApiConfig::new("https://notes.example.com");
        assert_eq!(config.notes_endpoint(), "https://notes.example.com/allNotes");
        assert_eq!(config.add_note_endpoint(), "https://notes.example.com/addNote");
    }

    #[test]
    fn test_trailing_slash_not_doubled() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.notes_endpoint(), "http://localhost:5000/allNotes");
    }

    #[test]
    fn test_empty_base_is_not_validated() {
        let config = ApiConfig::default();
        assert_eq!(config.notes_endpoint(), "/allNotes");
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_file_snake_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "api_base_url = \"http://snake:1\"\n");

        let config = ApiConfig::load_from(&path, "NOTES_TEST_SNAKE").unwrap();
        assert_eq!(config.api_base_url, "http://snake:1");
    }

    #[test]
    fn test_load_file_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "apiBaseUrl = \"http://camel:1\"\n");

        let config = ApiConfig::load_from(&path, "NOTES_TEST_CAMEL").unwrap();
        assert_eq!(config.api_base_url, "http://camel:1");
        assert_eq!(config.notes_endpoint(), "http://camel:1/allNotes");
    }

    #[test]
    fn test_load_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE);

        let config = ApiConfig::load_from(&missing, "NOTES_TEST_MISSING").unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "apiBaseUrl = \"http://file:1\"\n");
        set_var("NOTES_TEST_OVERRIDE_API_BASE_URL", "http://env:2");

        let config = ApiConfig::load_from(&path, "NOTES_TEST_OVERRIDE").unwrap();
        assert_eq!(config.api_base_url, "http://env:2");
    }

    #[test]
    fn test_load_from_env() {
        set_var("NOTES_API_BASE_URL", "http://from-env:9000");
        let config = ApiConfig::load().unwrap();
        assert_eq!(config.api_base_url, "http://from-env:9000");
        assert_eq!(config.notes_endpoint(), "http://from-env:9000/allNotes");
    }
}
