//! Main CLI application structure

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{subtask, task};
use crate::domain::{Catalog, OrderPolicy, PageSize};
use crate::storage::{Config, Project};

#[derive(Parser)]
#[command(name = "tareas")]
#[command(author, version, about = "Tasks and subtasks ordered shortest-job-first")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new tareas project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Manage subtasks
    #[command(subcommand)]
    Subtask(subtask::SubtaskCommands),

    /// Show the priority and state catalog
    Labels,

    /// Show or change project settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the project settings
    Show,

    /// Change a project setting (order_policy or page_size)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.format {
        Some(format) => format,
        None => Config::load()?.global.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);

    output.verbose("tareas starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Created data directory at: {}", project.data_dir().display()),
            );
            output.success(&format!(
                "Initialized tareas project at {}",
                project.root().display()
            ));
        }

        Commands::Task(cmd) => task::run(cmd, &output)?,
        Commands::Subtask(cmd) => subtask::run(cmd, &output)?,

        Commands::Labels => show_labels(&output, &Catalog::standard()),

        Commands::Config(cmd) => run_config(cmd, &output)?,
    }

    Ok(())
}

fn show_labels(output: &Output, catalog: &Catalog) {
    if output.is_json() {
        output.data(catalog);
        return;
    }

    println!("Priorities:");
    for entry in &catalog.priorities {
        println!("  {}  {}", entry.id, entry.name);
    }
    println!("States:");
    for entry in &catalog.states {
        println!("  {}  {}", entry.id, entry.name);
    }
}

fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let project = Project::open_current()?;
    let mut config = project.config().clone();

    match cmd {
        ConfigCommands::Show => {}
        ConfigCommands::Set { key, value } => {
            match key.as_str() {
                "order_policy" => config.project.order_policy = value.parse::<OrderPolicy>()?,
                "page_size" => {
                    let size: usize = value
                        .parse()
                        .map_err(|_| anyhow::anyhow!("page_size must be a number, got '{}'", value))?;
                    config.project.page_size = PageSize::try_from(size)?;
                }
                other => bail!("Unknown setting '{}' (expected order_policy or page_size)", other),
            }
            output.verbose_ctx("config", &format!("Setting {} = {}", key, value));
            config.save_project()?;
        }
    }

    if output.is_json() {
        output.data(&config.project);
    } else {
        println!("order_policy = {}", config.project.order_policy);
        println!("page_size = {}", config.project.page_size);
    }

    Ok(())
}
