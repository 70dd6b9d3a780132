//! devicefarm-upload: drive the lifecycle of a Device Farm upload.
//!
//! Configuration comes from the environment (or `.env`): DEVICEFARM_BACKEND,
//! AWS_REGION, AWS_PARTITION, AWS_ACCOUNT_ID, DEVICEFARM_ENDPOINT,
//! DEVICEFARM_MAX_ATTEMPTS.

use anyhow::Context;
use clap::{Parser, Subcommand};
use devicefarm_cli::{init_tracing, log_error, outcome_json};
use devicefarm_client::create_client;
use devicefarm_core::{AccountContext, Config, UploadConfig, UploadState, UploadType};
use devicefarm_resource::{decode_project_arn, ResourceError, UploadResource};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "devicefarm-upload", about = "Device Farm upload resource CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an upload and print its state
    Create {
        /// ARN of the project the upload belongs to
        #[arg(long)]
        project_arn: String,
        /// Upload type, e.g. ANDROID_APP
        #[arg(long)]
        r#type: UploadType,
        /// Upload name
        #[arg(long)]
        name: String,
        /// Content type of the file
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Read an upload by ARN
    Read {
        /// Upload ARN
        arn: String,
    },
    /// Change the name and/or content type of an upload
    Update {
        /// Upload ARN
        arn: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New content type
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete an upload by ARN
    Delete {
        /// Upload ARN
        arn: String,
    },
    /// Import an existing upload by ARN
    Import {
        /// Upload ARN
        arn: String,
    },
    /// Print the project ARN an upload ARN belongs to
    Decode {
        /// Upload ARN
        arn: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

async fn connect(config: &Config, context: AccountContext) -> anyhow::Result<UploadResource> {
    let api = create_client(config)
        .await
        .context("Failed to create Device Farm client")?;
    tracing::debug!(backend = %api.backend_type(), "Device Farm client ready");
    Ok(UploadResource::new(api, context))
}

fn reported(error: ResourceError) -> anyhow::Error {
    log_error(&error);
    error.into()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = Config::from_env().context("Invalid Device Farm configuration")?;
    let context = config
        .account_context()
        .context("Failed to determine account context")?;

    match cli.command {
        Commands::Create {
            project_arn,
            r#type,
            name,
            content_type,
        } => {
            let mut desired = UploadConfig::new(project_arn, r#type, name);
            desired.mutable.content_type = content_type;
            let resource = connect(&config, context).await?;
            let state = resource.create(&desired).await.map_err(reported)?;
            print_json(&state)?;
        }
        Commands::Read { arn } => {
            let resource = connect(&config, context).await?;
            let outcome = resource.read(&arn, false).await.map_err(reported)?;
            print_json(&outcome_json(&arn, &outcome)?)?;
        }
        Commands::Update {
            arn,
            name,
            content_type,
        } => {
            let resource = connect(&config, context).await?;
            let mut prior = UploadState::with_id(&arn);
            resource.refresh(&mut prior).await.map_err(reported)?;
            if prior.is_removed() {
                anyhow::bail!("Upload {} no longer exists", arn);
            }

            let upload_type = prior
                .upload_type
                .with_context(|| format!("Upload {} has no type", arn))?;
            let mut desired = UploadConfig::new(
                prior.project_arn.clone(),
                upload_type,
                name.unwrap_or_else(|| prior.name.clone()),
            );
            desired.mutable.content_type = content_type;

            let outcome = resource.update(&prior, &desired).await.map_err(reported)?;
            print_json(&outcome_json(&arn, &outcome)?)?;
        }
        Commands::Delete { arn } => {
            let resource = connect(&config, context).await?;
            resource.delete(&arn).await.map_err(reported)?;
            print_json(&serde_json::json!({ "arn": arn, "deleted": true }))?;
        }
        Commands::Import { arn } => {
            let resource = connect(&config, context).await?;
            let state = resource.import(&arn).await.map_err(reported)?;
            print_json(&state)?;
        }
        Commands::Decode { arn } => {
            let project_arn = decode_project_arn(&arn, &context)?;
            print_json(&serde_json::json!({ "arn": arn, "project_arn": project_arn }))?;
        }
    }

    Ok(())
}
