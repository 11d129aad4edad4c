use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{Codec, PasswordSize, Snapshot};
use tpw_tools::{format_check_report, format_decoded_pretty, format_password, ErrorReport};

#[derive(Parser)]
#[command(
    name = "tpw-tools",
    version,
    about = "Transfer password inspection and encoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a password and show what it carries.
    Decode {
        /// Password text; whitespace is ignored. Read from stdin when omitted.
        password: Vec<String>,
        /// Expected size (gold, silver or bronze). Detected from length when omitted.
        #[arg(long)]
        size: Option<PasswordSize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Encode a snapshot JSON file into a password.
    Encode {
        /// Path to the snapshot JSON.
        snapshot: PathBuf,
        /// Password size to produce.
        #[arg(long)]
        size: PasswordSize,
        /// Print the password in rows of ten.
        #[arg(long)]
        rows: bool,
        /// Print the URL-safe form.
        #[arg(long)]
        url: bool,
    },
    /// Report which checksum rows of a password are wrong.
    Check {
        /// Password text, complete or partial. Read from stdin when omitted.
        password: Vec<String>,
    },
    /// Convert between a password and its URL-safe form.
    Url {
        #[arg(value_enum)]
        direction: UrlDirection,
        text: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UrlDirection {
    /// Password to URL-safe text.
    To,
    /// URL-safe text back to a password.
    From,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let codec = Codec::default();
    match cli.command {
        Command::Decode {
            password,
            size,
            format,
        } => {
            let input = password_input(&password)?;
            match (codec.decode(&input, size), format) {
                (Ok(decoded), OutputFormat::Json) => {
                    let json = serde_json::to_string_pretty(&decoded).context("serialize json")?;
                    println!("{json}");
                }
                (Ok(decoded), OutputFormat::Pretty) => {
                    let cleaned: String = input.split_whitespace().collect();
                    print!("{}", format_decoded_pretty(&cleaned, &decoded));
                }
                (Err(err), OutputFormat::Json) => {
                    let json = serde_json::to_string_pretty(&ErrorReport::from(&err))
                        .context("serialize json")?;
                    println!("{json}");
                    return Ok(ExitCode::FAILURE);
                }
                (Err(err), OutputFormat::Pretty) => {
                    return Err(err).context("decode failed");
                }
            }
        }
        Command::Encode {
            snapshot,
            size,
            rows,
            url,
        } => {
            let contents = fs::read_to_string(&snapshot)
                .with_context(|| format!("read snapshot {}", snapshot.display()))?;
            let snapshot: Snapshot =
                serde_json::from_str(&contents).context("parse snapshot json")?;
            let password = codec.encode(&snapshot, size).context("encode snapshot")?;
            if url {
                println!("{}", wire::password_to_url(&password));
            } else if rows {
                println!("{}", format_password(&password));
            } else {
                println!("{password}");
            }
        }
        Command::Check { password } => {
            let input = password_input(&password)?;
            let groups = wire::validate_checksums(&input);
            let symbols = input.chars().filter(|ch| wire::symbol_to_index(*ch).is_some());
            let complete_rows = symbols.count() / wire::GROUP_LEN;
            println!("{}", format_check_report(&groups, complete_rows));
            if !groups.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Url { direction, text } => {
            let converted = match direction {
                UrlDirection::To => wire::password_to_url(&text),
                UrlDirection::From => wire::url_to_password(&text),
            };
            println!("{converted}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn password_input(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.concat());
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("read password from stdin")?;
    if input.trim().is_empty() {
        bail!("no password given");
    }
    Ok(input)
}
