#![doc = "resume-studio: document model, editor core and export pipeline for the Resume Studio builder."]

//! This crate contains the editing core consumed by the Resume Studio
//! surfaces: the document schema, the save-status state machine, per-section
//! editors, the pure preview renderer, the REST persistence gateway and the
//! PDF export adapter. The bundled CLI drives the same library against a
//! running backend.

pub mod config;
pub mod content;
pub mod contract;
pub mod editor;
pub mod export;
pub mod gateway;
pub mod render;
pub mod session;
pub mod store;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::contract::{ApiError, Credentials, ResumeGateway};
use crate::export::PdfExporter;
use crate::gateway::HttpGateway;
use crate::render::render;

#[derive(Parser)]
#[clap(
    name = "resume-studio",
    version,
    about = "Browse, duplicate and export resumes stored in a Resume Studio backend"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the resumes owned by the signed-in user
    List,
    /// Print one resume, content included
    Show {
        id: i64,
    },
    /// List the available seed templates
    Templates,
    /// Server-side copy of a resume under a new title
    Duplicate {
        id: i64,
        /// Title for the copy; the backend picks one when omitted
        #[clap(long)]
        title: Option<String>,
    },
    /// Delete a resume
    Delete {
        id: i64,
    },
    /// Render a resume and export it as an A4 PDF
    Export {
        id: i64,
        /// Output path; defaults to a slug of the resume title
        #[clap(long)]
        out: Option<PathBuf>,
    },
}

/// Async CLI entrypoint, split from `main` so integration tests can drive it.
pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;
    let session = HttpGateway::login(
        &config.api_base_url,
        &Credentials {
            email: &config.email,
            password: &config.password,
        },
    )
    .await?;
    let gateway = HttpGateway::new(&config.api_base_url, session);

    match dispatch(&gateway, cli.command).await {
        Ok(()) => Ok(()),
        Err(err) => {
            // The gateway only surfaces the typed error; the reaction to an
            // expired session (teardown, back to sign-in) is owned here.
            if let Some(ApiError::SessionExpired) = err.downcast_ref::<ApiError>() {
                gateway.sign_out();
                return Err(anyhow!("session expired, please sign in again"));
            }
            Err(err)
        }
    }
}

async fn dispatch(gateway: &HttpGateway, command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            let resumes = gateway.list_resumes().await?;
            for resume in &resumes {
                println!(
                    "{:>6}  {:<40}  updated {}",
                    resume.id, resume.title, resume.updated_at
                );
            }
            println!("{} resume(s)", resumes.len());
        }
        Commands::Show { id } => {
            let resume = gateway.get_resume(id).await?;
            println!("{}", serde_json::to_string_pretty(&resume)?);
        }
        Commands::Templates => {
            let templates = gateway.list_templates().await?;
            for template in &templates {
                println!("{:<12}  {:<24}  {}", template.id, template.name, template.description);
            }
        }
        Commands::Duplicate { id, title } => {
            let copy = gateway.duplicate_resume(id, title.as_deref()).await?;
            println!("created resume {} \"{}\"", copy.id, copy.title);
        }
        Commands::Delete { id } => {
            gateway.delete_resume(id).await?;
            println!("deleted resume {id}");
        }
        Commands::Export { id, out } => {
            let resume = gateway.get_resume(id).await?;
            let path = out.unwrap_or_else(|| PathBuf::from(format!("{}.pdf", slug(&resume.title))));
            let preview = render(&resume.content);
            let mut exporter = PdfExporter::new();
            exporter
                .export_to_file(&preview, &resume.title, &path)
                .await?;
            println!("exported resume {} to {}", resume.id, path.display());
        }
    }
    Ok(())
}

/// Filename slug: lowercased, whitespace collapsed to dashes, everything but
/// word characters and dashes stripped.
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = false;
    for c in title.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_dash && !out.is_empty() {
                out.push('-');
                last_dash = true;
            }
        } else if c.is_alphanumeric() || c == '_' {
            out.push(c);
            last_dash = false;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "resume".to_string()
    } else {
        out
    }
}
