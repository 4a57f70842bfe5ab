//! gambit: a brute-force material-search move picker.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr so they never interleave with protocol output.
//!
//! Usage:
//!   gambit [--config FILE]

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use gambit::config::EngineConfig;
use gambit::engine::{Engine, EngineError};
use gambit::protocol::parser::{parse_command, Command};

/// Parses command-line arguments into the startup configuration.
fn load_config() -> EngineConfig {
    let args: Vec<String> = env::args().collect();
    let mut config = EngineConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("--config requires a file path");
                    process::exit(1);
                };
                config = match EngineConfig::load(Path::new(path)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                println!("Usage: gambit [--config FILE]");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    config
}

/// Dispatches one command. Returns `false` when the loop should stop.
fn dispatch<W: Write>(engine: &mut Engine, cmd: Command, out: &mut W) -> Result<bool, EngineError> {
    match cmd {
        Command::Hello => engine.handle_hello(out)?,
        Command::IsReady => engine.handle_isready(out)?,
        Command::SetOption { name, value } => engine.set_option(&name, value.as_deref())?,
        Command::NewGame => engine.new_game(),
        Command::Position { placement, side } => {
            engine.set_position(&placement, side.as_deref())?
        }
        Command::Go(params) => {
            engine.handle_go(&params, out)?;
        }
        Command::Eval => engine.handle_eval(out)?,
        Command::Display => engine.handle_display(out)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the main protocol loop.
fn main() {
    let mut engine = Engine::with_config(load_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match dispatch(&mut engine, cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(EngineError::Io(e)) => {
                eprintln!("output error: {}", e);
                break;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    let _ = out.flush();
}
