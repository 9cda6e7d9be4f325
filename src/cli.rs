// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Global options configure the GitHub lookup and logging; they can also be
// set through environment variables (GITHUB_API_URL, GITHUB_TOKEN).
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use url::Url;

use crate::github::{ResolverConfig, DEFAULT_API_BASE};

#[derive(Parser, Debug)]
#[command(
    name = "cdn-pin",
    version,
    about = "Turn GitHub file URLs into commit-pinned jsDelivr CDN links",
    long_about = "cdn-pin converts a github.com or raw.githubusercontent.com file URL into \
                  jsDelivr links pinned to the latest commit, the short commit hash or the \
                  branch, and prints ready-to-paste embed snippets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub api: ApiOptions,

    /// Log level for cdn-pin itself (RUST_LOG overrides it)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Options for the GitHub commit lookup
#[derive(Args, Debug, Clone)]
pub struct ApiOptions {
    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// Token for the GitHub API (raises the rate limit)
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// HTTP timeout in seconds for the commit lookup
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,
}

impl ApiOptions {
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            api_base: self.api_base.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single GitHub file URL
    ///
    /// Example: cdn-pin convert https://github.com/user/repo/blob/main/dist/app.js
    Convert {
        /// GitHub file URL (github.com/.../blob|raw|blame/... or raw.githubusercontent.com/...)
        url: String,

        /// Output the conversion as JSON
        #[arg(long)]
        json: bool,

        /// Also print embed snippets (<script>, <link>, <img>, ...)
        #[arg(long)]
        embed: bool,

        /// Skip the GitHub lookup and pin to the branch only
        #[arg(long)]
        offline: bool,
    },

    /// Read URLs from stdin, one per line
    ///
    /// Commands: :embed toggles embed snippets, :reset clears, :quit exits
    Interactive {
        /// Start with embed snippets shown
        #[arg(long)]
        embed: bool,

        /// Skip the GitHub lookup and pin to the branch only
        #[arg(long)]
        offline: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from([
            "cdn-pin",
            "convert",
            "https://github.com/user/repo/blob/main/a.js",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.api.timeout, 10);
        match cli.command {
            Commands::Convert {
                url,
                json,
                embed,
                offline,
            } => {
                assert_eq!(url, "https://github.com/user/repo/blob/main/a.js");
                assert!(!json && !embed && !offline);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cdn-pin",
            "interactive",
            "--embed",
            "--api-base",
            "https://ghe.example.com/api/v3",
            "--timeout",
            "3",
        ])
        .unwrap();

        let config = cli.api.resolver_config();
        assert_eq!(config.api_base.as_str(), "https://ghe.example.com/api/v3");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(matches!(cli.command, Commands::Interactive { embed: true, .. }));
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let result = Cli::try_parse_from(["cdn-pin", "--api-base", "not a url", "convert", "x"]);
        assert!(result.is_err());
    }
}
