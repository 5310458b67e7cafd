use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeaderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            logo: default_logo(),
            logo_alt: default_logo_alt(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_title() -> String {
    "Bodega".to_string()
}

fn default_logo() -> String {
    "assets/logo.png".to_string()
}

fn default_logo_alt() -> String {
    "Logo de Bodega".to_string()
}

fn default_currency() -> String {
    "S/.".to_string()
}

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../catalog.toml");

/// Load the catalog configuration embedded at build time.
/// Missing sections and keys fall back to defaults.
pub fn load_config() -> anyhow::Result<CatalogConfig> {
    parse_config(EMBEDDED_CONFIG)
}

pub fn parse_config(raw: &str) -> anyhow::Result<CatalogConfig> {
    let config: CatalogConfig = toml::from_str(raw)?;
    log::info!(
        "Catalog config loaded: title='{}', currency='{}'",
        config.header.title,
        config.display.currency
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.header.title, "Bodega");
        assert_eq!(config.header.logo_alt, "Logo de Bodega");
        assert_eq!(config.display.currency, "S/.");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[display]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.header, HeaderConfig::default());

        let config = parse_config("").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[header\ntitle = 1").is_err());
    }
}
