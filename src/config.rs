use clap::Parser;
use url::Url;

use crate::error::config::ConfigError;

/// Providers queried, in order, when no provider list is configured.
pub const DEFAULT_IP_PROVIDERS: [&str; 2] = ["http://ifconfig.me", "http://ip.me"];

/// Command-line arguments, each with an environment variable fallback.
#[derive(Parser, Debug)]
#[command(name = "ipbot", version, about = "Discord bot replying with the server's public IP")]
pub struct Cli {
    /// Discord bot token
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Public IP provider URL, queried in the order given (repeatable)
    #[arg(long = "provider", env = "IP_PROVIDERS", value_delimiter = ',')]
    pub providers: Vec<String>,
}

pub struct Config {
    pub discord_bot_token: String,
    pub ip_providers: Vec<String>,
}

impl Config {
    /// Validates parsed arguments into the bot configuration.
    ///
    /// The token is trimmed and must not be empty. Provider entries are trimmed and blank
    /// entries dropped; when none were supplied at all the default providers are used.
    ///
    /// # Arguments
    /// - `cli` - Parsed command-line arguments
    ///
    /// # Returns
    /// - `Ok(Config)` - Validated configuration
    /// - `Err(ConfigError::MissingToken)` - Token absent or blank
    /// - `Err(ConfigError::NoProviders)` - Providers supplied but all blank
    /// - `Err(ConfigError::InvalidProviderUrl)` - A provider is not an HTTP(S) URL
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let discord_bot_token = cli
            .token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let ip_providers = if cli.providers.is_empty() {
            DEFAULT_IP_PROVIDERS.iter().map(|p| p.to_string()).collect()
        } else {
            let providers: Vec<String> = cli
                .providers
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();

            if providers.is_empty() {
                return Err(ConfigError::NoProviders);
            }

            providers
        };

        for provider in &ip_providers {
            validate_provider_url(provider)?;
        }

        Ok(Self {
            discord_bot_token,
            ip_providers,
        })
    }
}

fn validate_provider_url(provider: &str) -> Result<(), ConfigError> {
    let url = Url::parse(provider).map_err(|e| ConfigError::InvalidProviderUrl {
        url: provider.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidProviderUrl {
            url: provider.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(token: Option<&str>, providers: &[&str]) -> Cli {
        Cli {
            token: token.map(str::to_string),
            providers: providers.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Tests that a missing token is rejected.
    ///
    /// Expected: Err(ConfigError::MissingToken)
    #[test]
    fn rejects_missing_token() {
        let result = Config::from_cli(cli(None, &[]));

        assert!(matches!(result, Err(ConfigError::MissingToken)));
    }

    /// Tests that an empty or whitespace-only token is rejected before any connection.
    ///
    /// Expected: Err(ConfigError::MissingToken)
    #[test]
    fn rejects_blank_token() {
        assert!(matches!(
            Config::from_cli(cli(Some(""), &[])),
            Err(ConfigError::MissingToken)
        ));
        assert!(matches!(
            Config::from_cli(cli(Some("   "), &[])),
            Err(ConfigError::MissingToken)
        ));
    }

    /// Tests that the default providers are used, in order, when none are configured.
    ///
    /// Expected: Ok with ifconfig.me followed by ip.me
    #[test]
    fn uses_default_providers() {
        let config = Config::from_cli(cli(Some(" token "), &[])).unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(
            config.ip_providers,
            vec!["http://ifconfig.me".to_string(), "http://ip.me".to_string()]
        );
    }

    /// Tests that configured providers keep their order and blank entries are dropped.
    ///
    /// Expected: Ok with the two non-blank providers in the given order
    #[test]
    fn keeps_configured_provider_order() {
        let config = Config::from_cli(cli(
            Some("token"),
            &["https://b.example", " ", "http://a.example"],
        ))
        .unwrap();

        assert_eq!(
            config.ip_providers,
            vec![
                "https://b.example".to_string(),
                "http://a.example".to_string()
            ]
        );
    }

    /// Tests that a provider list made only of blank entries is rejected.
    ///
    /// Expected: Err(ConfigError::NoProviders)
    #[test]
    fn rejects_blank_provider_list() {
        let result = Config::from_cli(cli(Some("token"), &["", "  "]));

        assert!(matches!(result, Err(ConfigError::NoProviders)));
    }

    /// Tests that providers must be absolute HTTP(S) URLs.
    ///
    /// Expected: Err(ConfigError::InvalidProviderUrl) for a relative and a non-HTTP URL
    #[test]
    fn rejects_invalid_provider_urls() {
        assert!(matches!(
            Config::from_cli(cli(Some("token"), &["ifconfig.me"])),
            Err(ConfigError::InvalidProviderUrl { .. })
        ));
        assert!(matches!(
            Config::from_cli(cli(Some("token"), &["ftp://ifconfig.me"])),
            Err(ConfigError::InvalidProviderUrl { .. })
        ));
    }
}
