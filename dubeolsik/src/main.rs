use anyhow::Context;
use clap::Parser;
use libdubeolsik::{parse_key_line, DubeolsikConfig, EditCommand, Typist};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Type Dubeolsik key sequences and print the resulting edit commands.
///
/// Each input line holds whitespace-separated key tokens, e.g.
/// `g k s r m f enter` or `toggle ctrl+e bs`.
#[derive(Debug, Parser)]
#[command(name = "dubeolsik", version)]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in Korean mode regardless of the config
    #[arg(long, conflicts_with = "latin")]
    korean: bool,

    /// Start in Latin mode regardless of the config
    #[arg(long)]
    latin: bool,

    /// Start with the Colemak remap active
    #[arg(long)]
    colemak: bool,

    /// Move ㅔ/ㅖ to the semicolon key under Colemak
    #[arg(long)]
    semicolon_swap: bool,

    /// Print commands as JSON lines
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> anyhow::Result<DubeolsikConfig> {
    let mut config = match &args.config {
        Some(path) => DubeolsikConfig::load_toml(path)?,
        None => DubeolsikConfig::default(),
    };
    if args.korean {
        config.base_mut().start_in_korean = true;
    }
    if args.latin {
        config.base_mut().start_in_korean = false;
    }
    if args.colemak {
        config.base_mut().layout_remap = true;
    }
    if args.semicolon_swap {
        config.semicolon_swap = true;
    }
    Ok(config)
}

fn print_commands(out: &mut impl Write, commands: &[EditCommand], json: bool) -> anyhow::Result<()> {
    for command in commands {
        if json {
            writeln!(out, "{}", serde_json::to_string(command)?)?;
        } else {
            writeln!(out, "  {:?}", command)?;
        }
    }
    Ok(())
}

fn print_text(out: &mut impl Write, typist: &Typist, json: bool) -> anyhow::Result<()> {
    if json {
        let state = serde_json::json!({
            "text": typist.text(),
            "composing": typist.buffer().composing_text(),
            "korean": typist.engine().is_korean(),
            "layout_remap": typist.engine().is_layout_remap(),
        });
        writeln!(out, "{}", state)?;
    } else {
        writeln!(out, "→ {:?}", typist.text())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut typist = Typist::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let events = match parse_key_line(&line) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("error: {e:#}");
                continue;
            }
        };
        let commands = typist.press_all(events);
        print_commands(&mut out, &commands, args.json)?;
        print_text(&mut out, &typist, args.json)?;
    }

    let commands = typist.finish();
    print_commands(&mut out, &commands, args.json)?;
    print_text(&mut out, &typist, args.json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags_override_config() {
        let args = Args::parse_from(["dubeolsik", "--latin", "--colemak"]);
        let config = load_config(&args).unwrap();
        assert!(!config.base().start_in_korean);
        assert!(config.base().layout_remap);

        let args = Args::parse_from(["dubeolsik"]);
        assert!(load_config(&args).unwrap().base().start_in_korean);
    }

    #[test]
    fn test_korean_and_latin_conflict() {
        assert!(Args::try_parse_from(["dubeolsik", "--korean", "--latin"]).is_err());
    }
}
