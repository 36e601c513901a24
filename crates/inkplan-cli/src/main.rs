mod logger;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use inkplan_layout::DEFAULT_DEVICE;
use inkplan_render::planner::DEFAULT_YEAR;
use inkplan_render::templates::parse_param_pairs;
use inkplan_render::{
    PlannerOptions, TemplateOptions, Theme, generate_planner, generate_template, resolve_theme,
    template_spec, template_specs,
};

use crate::logger::StderrLogger;
use crate::report::{TemplateHelp, profile_reports};

#[derive(Parser)]
#[command(name = "inkplan", about = "E-ink planner and template PDF generator", version)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ThemeArgs {
    /// Built-in theme profile name
    #[arg(long, default_value = "default")]
    theme_profile: String,

    /// JSON file with theme overrides
    #[arg(long)]
    theme_file: Option<PathBuf>,
}

impl ThemeArgs {
    async fn resolve(&self) -> Result<Theme> {
        Ok(resolve_theme(&self.theme_profile, self.theme_file.as_deref()).await?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a linked yearly planner
    Planner {
        /// Calendar year
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        /// Output PDF path. Default: planner_<year>.pdf
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target device profile
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Planner layout (full/balanced/compact); device default when omitted
        #[arg(long)]
        layout: Option<String>,

        /// Fail instead of falling back to a denser layout
        #[arg(long)]
        strict_layout: bool,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// List, describe, and generate single-page templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Show device profiles and which planner layouts fit them
    Profiles {
        /// Only this device
        #[arg(long)]
        device: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum TemplateCommands {
    /// List available templates
    List,

    /// Describe one template and its parameters
    Show {
        /// Template id or alias
        template: String,
    },

    /// Generate a template PDF
    Generate {
        /// Template id or alias
        template: String,

        /// Output PDF path. Default: template_<template>_<device>.pdf
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target device profile
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Template layout profile (full/balanced/compact)
        #[arg(long)]
        layout: Option<String>,

        /// Template parameter override in key=value form (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        #[command(flatten)]
        theme: ThemeArgs,
    },
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Planner {
            year,
            output,
            device,
            layout,
            strict_layout,
            theme,
        } => {
            let theme = theme.resolve().await?;
            let options = PlannerOptions {
                year,
                device,
                layout,
                strict_layout,
            };
            let destination = generate_planner(&options, &theme, output).await?;
            println!("Generated planner at: {}", destination.display());
        }

        Commands::Templates { command } => match command {
            TemplateCommands::List => {
                for spec in template_specs() {
                    println!("{}\t{}", spec.id, spec.title);
                }
            }
            TemplateCommands::Show { template } => {
                print!("{}", TemplateHelp(template_spec(&template)?));
            }
            TemplateCommands::Generate {
                template,
                output,
                device,
                layout,
                params,
                theme,
            } => {
                let params = parse_param_pairs(&params)?;
                let theme = theme.resolve().await?;
                let options = TemplateOptions {
                    template,
                    device,
                    layout,
                    params,
                };
                let destination = generate_template(&options, &theme, output).await?;
                println!("Generated template at: {}", destination.display());
            }
        },

        Commands::Profiles { device, json } => {
            let reports = profile_reports(device.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    print!("{report}");
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = StderrLogger::level_for(cli.verbose, cli.quiet);
    if let Err(e) = StderrLogger::new(level).init() {
        eprintln!("warning: logger unavailable: {e}");
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
