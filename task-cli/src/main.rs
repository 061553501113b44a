use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use task_cli::commands::{Action, CommandShell};
use task_cli::config::Config;
use task_cli::logging;
use task_cli::menu::MenuShell;
use todo_list::{Frontend, TaskFile, TaskManager};

#[derive(Parser, Debug)]
#[command(version, about = "Manage a personal task list")]
struct Cli {
    /// Configuration file, defaults to ./task-cli.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Task file, overrides the configured storage path
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    #[command(flatten)]
    Action(Action),
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = Config::load(args.config.as_deref()).context("cannot load configuration")?;
    if let Some(file) = args.file {
        config.storage.path = file;
    }
    let _log4rs_handle = logging::init(&config.logging.level)?;
    info!("Using task file {}", config.storage.path.display());

    let task_file = TaskFile::new(&config.storage.path);
    let first_run = !task_file.exists();
    let mut manager = TaskManager::new(task_file);
    let loaded = manager
        .reload()
        .inspect_err(|e| println!("Error loading tasks: {e}"))
        .is_ok();

    let mut frontend: Box<dyn Frontend<TaskFile>> = match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            if first_run {
                println!("No existing task file found. A new one will be created.");
            }
            Box::new(MenuShell::new(io::stdin().lock(), io::stdout().lock()))
        }
        Commands::Action(action) => {
            Box::new(CommandShell::new(action, io::stdout().lock()).loaded(loaded))
        }
    };
    frontend.run(&mut manager)?;

    Ok(())
}
