//! Interactive shell over an in-process minidfs coordinator

use clap::Parser;
use minidfs::common::{format_bytes, Config};
use minidfs::Dfs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "minidfs")]
#[command(about = "minidfs replicated in-memory file store shell")]
#[command(version)]
struct Args {
    /// Config file (TOML), defaults to ./minidfs.toml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replication factor (overrides config)
    #[arg(short, long)]
    replicas: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print listings and stats as JSON
    #[arg(long)]
    json: bool,
}

const HELP: &str = "\
commands:
  put <name> <data...>   write a file to every node
  get <name>             read a file
  stat <name>            show file metadata
  rm <name>              delete a file from every node
  ls                     list files per node
  stats                  show operation counters
  help                   show this message
  quit                   exit";

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    /// Payload is everything after the name and one separator, kept verbatim
    Put { name: &'a str, data: &'a str },
    Get(&'a str),
    Stat(&'a str),
    Rm(&'a str),
    Ls,
    Stats,
    Help,
    Quit,
    Empty,
    Unknown,
}

/// Split off the first whitespace-delimited word; the rest starts at the separator.
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], &s[i..])),
        None => Some((s, "")),
    }
}

fn parse_command(line: &str) -> Command<'_> {
    let Some((command, rest)) = next_word(line) else {
        return Command::Empty;
    };
    let arg = next_word(rest);
    let no_args = rest.trim().is_empty();

    match (command, arg) {
        ("put", Some((name, rest))) => {
            let mut chars = rest.chars();
            chars.next();
            Command::Put {
                name,
                data: chars.as_str(),
            }
        }
        ("get", Some((name, rest))) if rest.trim().is_empty() => Command::Get(name),
        ("stat", Some((name, rest))) if rest.trim().is_empty() => Command::Stat(name),
        ("rm", Some((name, rest))) if rest.trim().is_empty() => Command::Rm(name),
        ("ls", _) if no_args => Command::Ls,
        ("stats", _) if no_args => Command::Stats,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        _ => Command::Unknown,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // CLI has priority over file and environment
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(replicas) = args.replicas {
        config.dfs.replicas = replicas;
    }
    if let Some(level) = args.log_level.clone() {
        config.log_level = level;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let dfs = Dfs::from_config(&config.dfs)?;
    tracing::info!("minidfs {} ready with {} replicas", minidfs::VERSION, dfs.replicas());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;

        match parse_command(&line) {
            Command::Put { name, data } => {
                dfs.write(name, data.to_string())?;
                println!("ok");
            }
            Command::Get(name) => match dfs.read(name) {
                Ok(data) => println!("{}", String::from_utf8_lossy(&data)),
                Err(e) if e.is_not_found() => println!("{}", e),
                Err(e) => return Err(e.into()),
            },
            Command::Stat(name) => match dfs.stat(name) {
                Ok(file) if args.json => println!("{}", serde_json::to_string_pretty(&file)?),
                Ok(file) => {
                    println!("name:     {}", file.name());
                    println!("size:     {}", format_bytes(file.size()));
                    println!("modified: {}", file.last_modified().to_rfc3339());
                    println!("blake3:   {}", file.checksum());
                }
                Err(e) if e.is_not_found() => println!("{}", e),
                Err(e) => return Err(e.into()),
            },
            Command::Rm(name) => {
                dfs.delete(name)?;
                println!("ok");
            }
            Command::Ls => {
                let listings = dfs.list()?;
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&listings)?);
                } else {
                    println!("Files in DFS:");
                    for listing in listings {
                        println!("{}", listing);
                    }
                }
            }
            Command::Stats => {
                let stats = dfs.stats();
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                } else {
                    println!("{}", stats);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown => println!("unrecognized command: {} (try `help`)", line.trim()),
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "minidfs> ")?;
    stdout.flush()
}
