//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, HostseditPaths};
use crate::hosts::HostsFile;

#[derive(Parser)]
#[command(name = "hostsedit")]
#[command(about = "Edit the hosts file in place")]
pub struct Cli {
    /// Hosts file to operate on (default: config, then the system hosts file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Reject files with duplicate hosts or unparsed lines
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the IP a host resolves to (first match wins)
    Get { host: String },

    /// Print whether a host has a binding
    Exists { host: String },

    /// Bind host to ip (moves it off shared lines, prepends when new)
    Set { host: String, ip: String },

    /// Remove every binding of a host
    Delete { host: String },

    /// List effective host -> ip bindings
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report duplicate hosts and unparsed lines
    Check,

    /// Show or change the config file
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print config path and values
    Show,
    /// Set the hosts file used when --file is not given
    SetFile { path: PathBuf },
    /// Set whether files are loaded in strict mode by default
    SetStrict {
        #[arg(action = clap::ArgAction::Set)]
        strict: bool,
    },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let paths = HostseditPaths::default_paths();
    let open = |config: &Config| -> Result<HostsFile> {
        let path = config.resolve_hosts_file(cli.file.as_deref());
        Ok(HostsFile::load(&path, cli.strict || config.strict)?)
    };

    match cli.command {
        Commands::Get { ref host } => {
            let hosts = open(&Config::load(&paths)?)?;
            match hosts.get(host) {
                Some(ip) => {
                    println!("{ip}");
                    Ok(())
                }
                None => anyhow::bail!("host '{host}' not found in {}", hosts.location()),
            }
        }
        Commands::Exists { ref host } => {
            let hosts = open(&Config::load(&paths)?)?;
            println!("{}", hosts.exists(host));
            Ok(())
        }
        Commands::Set { ref host, ref ip } => {
            let mut hosts = open(&Config::load(&paths)?)?;
            hosts.edit(host, ip)?;
            println!("Set {host} -> {ip}");
            Ok(())
        }
        Commands::Delete { ref host } => {
            let mut hosts = open(&Config::load(&paths)?)?;
            if hosts.delete(host)? {
                println!("Deleted {host}");
            } else {
                println!("{host} not present");
            }
            Ok(())
        }
        Commands::List { json } => {
            let hosts = open(&Config::load(&paths)?)?;
            let bindings = hosts.bindings();
            if json {
                println!("{}", serde_json::to_string_pretty(&bindings)?);
            } else {
                for b in bindings {
                    println!("{}\t{}", b.host, b.ip);
                }
            }
            Ok(())
        }
        Commands::Check => {
            let config = Config::load(&paths)?;
            cmd_check(&config.resolve_hosts_file(cli.file.as_deref()))
        }
        Commands::Config { ref cmd } => cmd_config(&paths, cmd),
    }
}

fn cmd_check(path: &std::path::Path) -> Result<()> {
    let results = crate::doctor::run_checks(path)?;
    let mut failed = 0;
    for r in &results {
        let mark = if r.ok { "ok" } else { "!!" };
        println!("[{mark}] {}", r.message);
        if !r.ok {
            failed += 1;
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} check(s) failed");
    }
    Ok(())
}

fn cmd_config(paths: &HostseditPaths, cmd: &ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            let config = Config::load(paths)?;
            println!("config: {}", paths.config_file.display());
            println!("hosts_file: {}", config.resolve_hosts_file(None).display());
            println!("strict: {}", config.strict);
            Ok(())
        }
        ConfigCmd::SetFile { path } => {
            let mut config = Config::load(paths)?;
            config.hosts_file = Some(path.clone());
            config.save(paths)?;
            println!("Hosts file set to {}", path.display());
            Ok(())
        }
        ConfigCmd::SetStrict { strict } => {
            let mut config = Config::load(paths)?;
            config.strict = *strict;
            config.save(paths)?;
            println!("Strict mode: {strict}");
            Ok(())
        }
    }
}
