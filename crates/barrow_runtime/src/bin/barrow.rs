//! Barrow CLI entry point.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use barrow_engine::{Game, Renderer, scenario};
use barrow_runtime::{Repl, TerminalRenderer};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    seed: Option<u64>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.script.is_some() {
                    return Err("only one script file may be given".into());
                }
                config.script = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("barrow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let opening = scenario::opening()?;
    let game = Game::new(opening.world, opening.defeat_room, seed);

    if let Some(script) = config.script {
        run_script(game, &script)
    } else {
        Repl::new(game)?.run()?;
        Ok(())
    }
}

/// Batch mode: feed every line of the script to the game and exit.
fn run_script(mut game: Game, script: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(script)
        .map_err(|e| format!("failed to read {}: {e}", script.display()))?;

    let mut renderer = TerminalRenderer::new();
    game.intro(&mut renderer);
    for line in source.lines() {
        let line = line.trim().to_uppercase();
        if line.is_empty() {
            continue;
        }
        renderer.narrate(&format!("> {line}"));
        game.handle_line(&line, &mut renderer);
    }

    Ok(())
}

/// A seed for sessions where none was given. Reproducible runs pass --seed.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn print_help() {
    println!("barrow - a small text adventure\n");
    println!("USAGE:");
    println!("    barrow [OPTIONS] [SCRIPT]\n");
    println!("ARGS:");
    println!("    <SCRIPT>    Run the commands in this file and exit\n");
    println!("OPTIONS:");
    println!("    --seed <N>    Seed the dice for a reproducible session");
    println!("    -h, --help       Show this help");
    println!("    -V, --version    Show the version");
}
