//! Amazon Resource Names
//!
//! An ARN has the shape `arn:partition:service:region:account-id:resource`.
//! The resource component may itself contain `:` and `/`, so only the first
//! five separators are significant when parsing.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{PROJECT_RESOURCE_PREFIX, SERVICE_NAME};
use crate::error::{ErrorMetadata, LogLevel};

const ARN_PREFIX: &str = "arn:";
const ARN_SECTIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    #[error("arn: invalid prefix")]
    InvalidPrefix,

    #[error("arn: not enough sections")]
    NotEnoughSections,

    #[error("({value}) is an invalid ARN: {reason}")]
    Invalid { value: String, reason: String },
}

impl ErrorMetadata for ArnError {
    fn error_code(&self) -> &'static str {
        match self {
            ArnError::InvalidPrefix | ArnError::NotEnoughSections => "ARN_PARSE_ERROR",
            ArnError::Invalid { .. } => "ARN_INVALID",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }

    fn log_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

/// Parsed ARN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource: String,
}

impl FromStr for Arn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with(ARN_PREFIX) {
            return Err(ArnError::InvalidPrefix);
        }

        let sections: Vec<&str> = s.splitn(ARN_SECTIONS, ':').collect();
        if sections.len() != ARN_SECTIONS {
            return Err(ArnError::NotEnoughSections);
        }

        Ok(Arn {
            partition: sections[1].to_string(),
            service: sections[2].to_string(),
            region: sections[3].to_string(),
            account_id: sections[4].to_string(),
            resource: sections[5].to_string(),
        })
    }
}

impl Display for Arn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}{}:{}:{}:{}:{}",
            ARN_PREFIX, self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

/// Account, partition and region of the caller.
///
/// Passed explicitly to anything that has to mint an ARN, such as the
/// project reference derived from an upload ARN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountContext {
    pub account_id: String,
    pub partition: String,
    pub region: String,
}

impl AccountContext {
    pub fn new(
        account_id: impl Into<String>,
        partition: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            partition: partition.into(),
            region: region.into(),
        }
    }

    /// Build the ARN of a Device Farm project owned by this account.
    pub fn project_arn(&self, project_id: &str) -> Arn {
        Arn {
            partition: self.partition.clone(),
            service: SERVICE_NAME.to_string(),
            region: self.region.clone(),
            account_id: self.account_id.clone(),
            resource: format!("{}{}", PROJECT_RESOURCE_PREFIX, project_id),
        }
    }
}
