//! Main CLI application for the N-Queens game

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nqueens_game::{
    board::load_arrangement_from_file,
    config::{CliOverrides, OutputFormat, Settings},
    game::{GameSession, TickEvent, UndoError},
    solver,
    utils::{BoardFormatter, ColorOutput},
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "nqueens_game")]
#[command(about = "N-Queens puzzle game and solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the puzzle interactively on stdin
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        board_size: Option<usize>,

        /// High score file (overrides config)
        #[arg(long)]
        score_file: Option<PathBuf>,
    },

    /// Find a complete arrangement with the backtracking solver
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        board_size: Option<usize>,

        /// Write the arrangement to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also count every solution for this board size
        #[arg(long)]
        count: bool,
    },

    /// Audit an arrangement file for conflicts
    Check {
        /// Arrangement file path
        #[arg(short, long)]
        arrangement: PathBuf,

        /// Board size to audit against
        #[arg(short, long, default_value_t = 8)]
        board_size: usize,
    },

    /// Create example configuration and arrangement files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { config, board_size, score_file } => {
            play_command(config, board_size, score_file)
        }
        Commands::Solve { config, board_size, output, json, count } => {
            solve_command(config, board_size, output, json, count)
        }
        Commands::Check { arrangement, board_size } => {
            check_command(arrangement, board_size)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn load_settings(config_path: &PathBuf, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn play_command(
    config_path: PathBuf,
    board_size: Option<usize>,
    score_file: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides {
            board_size,
            high_score_file: score_file,
            format: None,
        },
    )?;

    let size = settings.game.board_size;
    let tick = Duration::from_millis(settings.animation.tick_ms);
    let mut session = GameSession::from_settings(&settings);
    let epoch = Instant::now();

    println!("{}", ColorOutput::info(&format!("♛ N-Queens ({}x{} board)", size, size)));
    println!("Commands: place ROW COL, undo, reset, solve, board, help, quit");
    print_board(&session);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            ["place", row, col] => {
                let (row, col) = match (row.parse::<usize>(), col.parse::<usize>()) {
                    (Ok(r), Ok(c)) => (r, c),
                    _ => {
                        eprintln!("{}", ColorOutput::warning("Usage: place ROW COL (decimal)"));
                        continue;
                    }
                };

                // Bounds are checked before the move reaches the session
                if row >= size || col >= size {
                    eprintln!("{}", ColorOutput::warning(&format!(
                        "Square ({}, {}) is outside the {}x{} board", row, col, size, size
                    )));
                    continue;
                }

                match session.place(row, col, epoch.elapsed()) {
                    Ok(()) => run_transition(&mut session, &epoch, tick),
                    Err(e) => eprintln!("{}", ColorOutput::warning(&e.to_string())),
                }
            }
            ["undo"] => match session.undo() {
                Ok(()) => print_board(&session),
                Err(UndoError::EmptyHistory) => {}
                Err(e) => eprintln!("{}", ColorOutput::warning(&e.to_string())),
            },
            ["reset"] => {
                session.reset();
                print_board(&session);
            }
            ["solve"] => {
                println!("Solving...");
                if session.solve() {
                    println!("{}", ColorOutput::success(&format!(
                        "Congratulations! You solved the {}-queen puzzle!", size
                    )));
                } else {
                    println!("{}", ColorOutput::warning(&format!(
                        "No solution exists for a {}x{} board", size, size
                    )));
                }
                print_board(&session);
            }
            ["board"] => print_board(&session),
            ["help"] => {
                println!("Commands: place ROW COL, undo, reset, solve, board, help, quit");
            }
            ["quit"] | ["exit"] => break,
            _ => eprintln!("{}", ColorOutput::warning("Unknown command; try 'help'")),
        }
    }

    Ok(())
}

/// Drive the session's tick until the in-flight move commits
fn run_transition(session: &mut GameSession, epoch: &Instant, tick: Duration) {
    while session.is_animating() {
        std::thread::sleep(tick);
        match session.tick(epoch.elapsed()) {
            None => {}
            Some(TickEvent::Placed(_)) => break,
            Some(TickEvent::Won { new_record }) => {
                println!("{}", ColorOutput::success(&format!(
                    "Congratulations! You solved the {}-queen puzzle!",
                    session.board().size()
                )));
                if let Some(score) = new_record {
                    println!("{}", ColorOutput::success(&format!(
                        "🏆 New best score: {} tries", score
                    )));
                }
                // A failed save never ends the game; warn and keep playing
                if let Some(e) = session.take_persist_error() {
                    eprintln!("{}", ColorOutput::warning(&format!("{:#}", e)));
                }
                break;
            }
        }
    }

    print_board(session);
}

fn print_board(session: &GameSession) {
    println!("{}", BoardFormatter::format_board_with_coords(session.board()));
    println!("{}", BoardFormatter::format_session_status(session, Duration::ZERO));
}

fn solve_command(
    config_path: PathBuf,
    board_size: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
    count: bool,
) -> Result<()> {
    let settings = load_settings(
        &config_path,
        CliOverrides {
            board_size,
            high_score_file: None,
            format: json.then_some(OutputFormat::Json),
        },
    )?;
    let size = settings.game.board_size;

    println!("{}", ColorOutput::info(&format!("🧮 Solving the {}-queens puzzle...", size)));
    let start_time = Instant::now();

    match nqueens_game::first_solution(size) {
        Some(board) => {
            println!("{}", ColorOutput::success(&format!(
                "✅ Found an arrangement in {:.3}s",
                start_time.elapsed().as_secs_f64()
            )));
            println!("{}", BoardFormatter::format_board_with_coords(&board));
            println!("{}", BoardFormatter::format_placement_list(board.placements()));

            if let Some(path) = output {
                BoardFormatter::save_arrangement(
                    board.placements(),
                    &path,
                    settings.output.format,
                )
                .context("Failed to save arrangement")?;
                println!("Arrangement saved to {}", path.display());
            }
        }
        None => {
            println!("{}", ColorOutput::warning(&format!(
                "❌ No arrangement exists for a {}x{} board", size, size
            )));
        }
    }

    if count {
        let total = solver::count_solutions(size);
        println!("Total solutions for {}x{}: {}", size, size, total);
    }

    Ok(())
}

fn check_command(arrangement_path: PathBuf, board_size: usize) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Auditing arrangement..."));

    let placements = load_arrangement_from_file(&arrangement_path)
        .with_context(|| format!("Failed to load arrangement from {}", arrangement_path.display()))?;

    let report = solver::audit_arrangement(board_size, &placements);
    println!("{}", report);

    if report.is_complete {
        println!("{}", ColorOutput::success("✅ Arrangement is a complete solution!"));
    } else if report.is_valid() {
        println!("{}", ColorOutput::info("Arrangement is conflict-free but incomplete"));
    } else {
        println!("{}", ColorOutput::error("❌ Arrangement has violations"));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/arrangements");

    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    nqueens_game::board::create_example_arrangements(&input_dir)
        .context("Failed to create example arrangements")?;
    println!("Created example arrangements in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- play");
    println!("3. Or audit a file: cargo run -- check --arrangement input/arrangements/solution8.txt");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "nqueens_game",
            "solve",
            "--board-size", "6",
            "--count",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from([
            "nqueens_game",
            "check",
            "--arrangement", "input/arrangements/solution8.txt",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/arrangements/solution8.txt").exists());
    }

    #[test]
    fn test_check_on_generated_example() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let placements = load_arrangement_from_file(
            temp_dir.path().join("input/arrangements/solution8.txt"),
        )
        .unwrap();
        let report = solver::audit_arrangement(8, &placements);
        assert!(report.is_complete);
    }
}
