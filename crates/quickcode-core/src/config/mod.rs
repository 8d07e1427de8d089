use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub encoder: EncoderConfig,
    pub phone: PhoneConfig,
    #[serde(default)]
    pub titles: TitleCatalog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// QR error correction level, from lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ErrorCorrection {
    #[default]
    L,
    M,
    Q,
    H,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncoderConfig {
    /// Square size requested from the barcode writer when a caller gives none.
    pub dimension: u32,
    pub error_correction: ErrorCorrection,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    /// Largest width or height a caller may request.
    pub max_dimension: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneStyle {
    /// North American digit grouping.
    #[default]
    Nanp,
    PassThrough,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneConfig {
    pub style: PhoneStyle,
}

/// Category labels used as result titles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TitleCatalog {
    pub text: String,
    pub email: String,
    pub phone: String,
    pub sms: String,
    pub contact: String,
    pub location: String,
}

impl Default for TitleCatalog {
    fn default() -> Self {
        Self {
            text: "Text".to_string(),
            email: "E-Mail".to_string(),
            phone: "Phone".to_string(),
            sms: "SMS".to_string(),
            contact: "Contact".to_string(),
            location: "Location".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment variables
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// Environment keys use the `QUICKCODE` prefix and `__` as the section separator,
    /// e.g. `QUICKCODE__ENCODER__ERROR_CORRECTION=M`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "debug")?
            .set_default("encoder.dimension", 400)?
            .set_default("encoder.error_correction", "L")?
            .set_default("encoder.margin", 4)?
            .set_default("encoder.max_dimension", 4096)?
            .set_default("phone.style", "nanp")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("QUICKCODE")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
