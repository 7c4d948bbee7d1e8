//! CcLicense CLI - Bridge interface for host renderers
//!
//! Commands: licenses, resolve, variables, render
//! Outputs JSON (or the raw snippet) to stdout
//! Returns non-zero on malformed payloads

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use cclicense_core::{
    Attributes, License, LicenseCode, SnippetRenderer, SnippetTemplate, TemplateVariables,
};

#[derive(Parser)]
#[command(name = "cclicense-cli")]
#[command(about = "CcLicense CLI - Creative Commons Attribution Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a custom snippet template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported licenses
    Licenses,

    /// Resolve attributes into license data
    Resolve {
        /// JSON payload (Attributes)
        #[arg(short, long)]
        payload: String,
    },

    /// Project attributes into template variables
    Variables {
        /// JSON payload (Attributes)
        #[arg(short, long)]
        payload: String,
    },

    /// Render the HTML attribution snippet
    Render {
        /// JSON payload (Attributes)
        #[arg(short, long)]
        payload: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let template = match &cli.template {
        Some(path) => match SnippetTemplate::load(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!(r#"{{"error": "Failed to load template: {}"}}"#, e);
                return ExitCode::FAILURE;
            }
        },
        None => SnippetTemplate::default(),
    };

    match cli.command {
        Commands::Licenses => {
            let licenses: Vec<_> = LicenseCode::ALL
                .iter()
                .map(|code| {
                    serde_json::json!({
                        "code": code.as_str(),
                        "title": code.title(),
                        "url": code.url(),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&licenses).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Resolve { payload } => {
            let attributes: Attributes = match serde_json::from_str(&payload) {
                Ok(a) => a,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let license = License::resolve(&attributes);
            println!("{}", serde_json::to_string_pretty(&license).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Variables { payload } => {
            let attributes: Attributes = match serde_json::from_str(&payload) {
                Ok(a) => a,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let variables = TemplateVariables::project(&License::resolve(&attributes));
            println!("{}", serde_json::to_string_pretty(&variables).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Render { payload } => {
            let attributes: Attributes = match serde_json::from_str(&payload) {
                Ok(a) => a,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let renderer = SnippetRenderer::new(template);
            println!("{}", renderer.render(&attributes));
            ExitCode::SUCCESS
        }
    }
}
