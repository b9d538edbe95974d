//! Server configuration, read from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenvy`) when one exists, so every value below
//! can live there as well.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | Bind address |
//! | `PORT` | `5000` | HTTP port |
//! | `SEED_SAMPLE_ORDERS` | `true` | Fill the store with the eight demo orders on start |
//! | `VISIBLE_ORDERS` | `5` | Cards in `GET /api/queue` when no `limit` is given |
//! | `ORDER_ACTOR_BUFFER` | `32` | Requests that may wait for the order actor |

use crate::projector::DEFAULT_VISIBLE_ORDERS;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_sample_orders: bool,
    pub visible_orders: usize,
    pub actor_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_sample_orders: true,
            visible_orders: DEFAULT_VISIBLE_ORDERS,
            actor_buffer: 32,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            host: lookup("HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or(defaults.host),
            port: parse(&lookup, "PORT", defaults.port)?,
            seed_sample_orders: parse_flag(
                &lookup,
                "SEED_SAMPLE_ORDERS",
                defaults.seed_sample_orders,
            )?,
            visible_orders: parse(&lookup, "VISIBLE_ORDERS", defaults.visible_orders)?,
            actor_buffer: parse(&lookup, "ORDER_ACTOR_BUFFER", defaults.actor_buffer)?,
        };
        if config.actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                name: "ORDER_ACTOR_BUFFER",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value,
            reason: "expected true or false".to_string(),
        }),
    }
}
