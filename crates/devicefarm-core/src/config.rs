//! Configuration module
//!
//! Settings for reaching Device Farm and for minting ARNs on behalf of the
//! caller. Everything is read from the environment (after loading `.env`).

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::arn::AccountContext;
use crate::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_PARTITION, DEFAULT_REGION, MEMORY_ACCOUNT_ID,
};

/// Which implementation of the upload API to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The real service through the AWS SDK
    Aws,
    /// In-process emulation, for tests and offline runs
    Memory,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(BackendKind::Aws),
            "memory" => Ok(BackendKind::Memory),
            _ => Err(anyhow::anyhow!("Invalid Device Farm backend: {}", s)),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BackendKind::Aws => write!(f, "aws"),
            BackendKind::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendKind,
    pub region: String,
    pub partition: String,
    pub account_id: Option<String>,
    pub endpoint: Option<String>, // Custom endpoint (e.g. a local emulator)
    pub max_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Aws,
            region: DEFAULT_REGION.to_string(),
            partition: DEFAULT_PARTITION.to_string(),
            account_id: None,
            endpoint: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let backend = match env::var("DEVICEFARM_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::Aws,
        };

        let config = Config {
            backend,
            region: env::var("AWS_REGION")
                .or_else(|_| env::var("AWS_DEFAULT_REGION"))
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            partition: env::var("AWS_PARTITION").unwrap_or_else(|_| DEFAULT_PARTITION.to_string()),
            account_id: env::var("AWS_ACCOUNT_ID").ok().filter(|s| !s.is_empty()),
            endpoint: env::var("DEVICEFARM_ENDPOINT").ok().filter(|s| !s.is_empty()),
            max_attempts: match env::var("DEVICEFARM_MAX_ATTEMPTS") {
                Ok(value) => value.parse().map_err(|e| {
                    anyhow::anyhow!("Invalid DEVICEFARM_MAX_ATTEMPTS '{}': {}", value, e)
                })?,
                Err(_) => DEFAULT_MAX_ATTEMPTS,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.region.is_empty() {
            return Err(anyhow::anyhow!("AWS_REGION must not be empty"));
        }

        if self.partition.is_empty() {
            return Err(anyhow::anyhow!("AWS_PARTITION must not be empty"));
        }

        if let Some(ref account_id) = self.account_id {
            if account_id.len() != 12 || !account_id.chars().all(|c| c.is_ascii_digit()) {
                return Err(anyhow::anyhow!("AWS_ACCOUNT_ID must be a 12-digit account number"));
            }
        }

        if self.backend == BackendKind::Aws && self.account_id.is_none() {
            return Err(anyhow::anyhow!(
                "AWS_ACCOUNT_ID must be set when using the aws backend"
            ));
        }

        if self.max_attempts == 0 {
            return Err(anyhow::anyhow!("DEVICEFARM_MAX_ATTEMPTS must be at least 1"));
        }

        Ok(())
    }

    /// Context used to rebuild project ARNs from upload ARNs.
    ///
    /// The memory backend falls back to a placeholder account.
    pub fn account_context(&self) -> Result<AccountContext, anyhow::Error> {
        let account_id = match (&self.account_id, self.backend) {
            (Some(id), _) => id.clone(),
            (None, BackendKind::Memory) => MEMORY_ACCOUNT_ID.to_string(),
            (None, BackendKind::Aws) => {
                return Err(anyhow::anyhow!("AWS_ACCOUNT_ID not configured"));
            }
        };

        Ok(AccountContext::new(
            account_id,
            self.partition.clone(),
            self.region.clone(),
        ))
    }
}
