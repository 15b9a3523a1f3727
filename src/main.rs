//! chatfind - Entry Point

use chatfind::integration::{run_interactive, TranscriptHost};
use chatfind::model::AppError;
use chatfind::search::ModeChange;
use chatfind::state::FindController;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Find text in a chat transcript
#[derive(Parser, Debug)]
#[command(name = "chatfind")]
#[command(version)]
#[command(about = "Find-in-conversation for JSONL and JSON chat transcripts")]
pub struct Args {
    /// Path to the transcript (JSONL or a JSON array of messages)
    pub file: PathBuf,

    /// Pattern to search for
    #[arg(required_unless_present = "interactive")]
    pub pattern: Option<String>,

    /// Match case
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Match whole words only
    #[arg(short, long, conflicts_with = "regex")]
    pub whole_word: bool,

    /// Treat the pattern as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Move to the N-th match (1-based) before reporting
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub select: Option<u32>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Read find-bar commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Mode flags the user actually passed. Unset flags leave config alone.
    fn mode_override(&self) -> ModeChange {
        ModeChange {
            case_sensitive: self.case_sensitive.then_some(true),
            whole_word: self.whole_word.then_some(true),
            regex: self.regex.then_some(true),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = chatfind::config::load_config_with_precedence(args.config.clone())?;
        let merged = chatfind::config::merge_config(config_file);
        let with_env = chatfind::config::apply_env_overrides(merged);
        chatfind::config::apply_cli_overrides(with_env, args.mode_override())
    };

    chatfind::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let (transcript, skipped) = chatfind::parser::load_transcript(&args.file)?;
    for error in &skipped {
        eprintln!("warning: {error}");
    }

    let mut host = TranscriptHost::new(transcript);
    let mut controller = FindController::new(config.default_mode);

    if let Some(pattern) = &args.pattern {
        controller.on_query_changed(&mut host, pattern);
    }
    if let Some(n) = args.select {
        for _ in 1..n {
            controller.next(&mut host);
        }
    }

    for warning in host.take_warnings() {
        eprintln!("warning: {warning}");
    }

    if args.interactive {
        let stdin = io::stdin();
        run_interactive(
            &mut controller,
            &mut host,
            &config.keybindings,
            stdin.lock(),
            io::stdout().lock(),
        )?;
        return Ok(());
    }

    let report = if args.json {
        chatfind::view::render_json(controller.state(), host.transcript())?
    } else {
        chatfind::view::render_report(controller.state(), host.transcript())
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}")?;
    if args.json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
