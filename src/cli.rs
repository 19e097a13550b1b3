//! CLI definitions and command routing.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::GsdPaths;
use crate::error::GsdError;
use crate::hosts::HostsEditor;
use crate::orchestrator::Orchestrator;
use crate::sites::ModeCatalog;

#[derive(Parser)]
#[command(name = "gsd", version)]
#[command(about = "Block distracting websites through the hosts file")]
pub struct Cli {
    /// Mode to block (a section in sites.ini), or `play` to lift the block after 5 minutes
    #[arg(required_unless_present_any = ["list", "clear"])]
    pub mode: Option<String>,

    /// List configured modes and their sites
    #[arg(long, conflicts_with_all = ["mode", "clear"])]
    pub list: bool,

    /// Remove the block right away
    #[arg(long, conflicts_with = "mode")]
    pub clear: bool,

    /// Path to sites.ini (default: ./sites.ini, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub sites: Option<PathBuf>,

    /// Hosts file to edit (default: the system hosts file)
    #[arg(long, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Argument errors exit 1 like every other failure; --help/--version exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            let catalog = load_catalog(&GsdPaths::resolve(None, None)).unwrap_or_default();
            eprintln!("{}", usage(&catalog));
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    let paths = GsdPaths::resolve(cli.sites, cli.hosts_file);

    if cli.list {
        return cmd_list(&load_catalog(&paths)?);
    }
    ensure_privileged()?;
    if cli.clear {
        return cmd_clear(&paths);
    }
    let catalog = load_catalog(&paths)?;
    match cli.mode {
        Some(mode) => cmd_mode(&paths, &catalog, &mode),
        None => Err(usage(&catalog).into()),
    }
}

fn load_catalog(paths: &GsdPaths) -> Result<ModeCatalog, GsdError> {
    ModeCatalog::load(paths.sites_file()?)
}

/// `usage: gsd [work|social|play]`
fn usage(catalog: &ModeCatalog) -> GsdError {
    GsdError::Usage(format!("usage: gsd [{}]", catalog.modes_prompt()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GSD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn ensure_privileged() -> Result<(), GsdError> {
    if crate::platform::is_privileged() {
        Ok(())
    } else {
        Err(GsdError::NotPrivileged)
    }
}

fn cmd_list(catalog: &ModeCatalog) -> Result<()> {
    for mode in catalog.modes() {
        println!("{}\t{}", mode.name, mode.sites.join(", "));
    }
    Ok(())
}

fn cmd_clear(paths: &GsdPaths) -> Result<()> {
    let hosts = HostsEditor::new(&paths.hosts_file);
    let network = crate::platform::default_network_refresher();
    let catalog = ModeCatalog::default();
    Orchestrator::new(&catalog, &hosts, network.as_ref()).clear()?;
    println!("Block cleared");
    Ok(())
}

fn cmd_mode(paths: &GsdPaths, catalog: &ModeCatalog, mode: &str) -> Result<()> {
    let hosts = HostsEditor::new(&paths.hosts_file);
    let network = crate::platform::default_network_refresher();
    let delay = crate::config::play_delay();
    let orchestrator =
        Orchestrator::new(catalog, &hosts, network.as_ref()).with_play_delay(delay);

    if mode == crate::orchestrator::PLAY_MODE {
        println!("Play time: block lifts in {} seconds", delay.as_secs());
    }
    match orchestrator.run(mode) {
        Ok(()) => {}
        Err(GsdError::UnknownMode(_)) => return Err(usage(catalog).into()),
        Err(e) => return Err(e.into()),
    }

    if mode == crate::orchestrator::PLAY_MODE {
        println!("Block cleared");
    } else {
        println!("Blocking mode: {mode}");
    }
    Ok(())
}
