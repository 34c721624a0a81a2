use std::{
    fs,
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::mpsc,
    thread,
    time::Duration,
};

use clap::{Parser, Subcommand};
use log::error;
use reckon::{
    evaluate,
    pomodoro::{
        session::Session,
        settings::{FileStore, Settings},
        terminal::{TerminalEffects, forward_commands, print_help, run},
    },
    repl,
    util::num::format_number,
};

/// reckon evaluates flat arithmetic expressions and runs a focus/break
/// countdown timer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Starts the interactive prompt. This is the default.
    Repl,
    /// Evaluates a single expression.
    Eval {
        /// Tells reckon to treat the contents as a file and evaluate each of
        /// its non-blank lines.
        #[arg(short, long)]
        file: bool,

        contents: String,
    },
    /// Runs the focus/break countdown timer in the terminal.
    Pomodoro {
        /// Directory holding the persisted settings.
        #[arg(long, default_value = ".")]
        settings_dir: PathBuf,

        /// Focus session length in minutes.
        #[arg(long)]
        focus: Option<u32>,

        /// Short break length in minutes.
        #[arg(long)]
        short_break: Option<u32>,

        /// Long break length in minutes.
        #[arg(long)]
        long_break: Option<u32>,

        /// Milliseconds between two ticks of the countdown.
        #[arg(long, default_value_t = 1000)]
        tick_ms: u64,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            if let Err(e) = repl::run(io::stdin().lock(), io::stdout().lock()) {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Command::Eval { file, contents } => eval(file, &contents),
        Command::Pomodoro { settings_dir,
                            focus,
                            short_break,
                            long_break,
                            tick_ms, } => {
            pomodoro(&settings_dir, [focus, short_break, long_break], Duration::from_millis(tick_ms))
        },
    }
}

fn eval(file: bool, contents: &str) -> ExitCode {
    let script = if file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.to_string()
    };

    let mut failed = false;

    for (index, line) in script.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
        match evaluate(line) {
            Ok(value) => println!("= {}", format_number(value)),
            Err(e) => {
                failed = true;
                error!("line {}: {e}", index + 1);
                eprintln!("Invalid expression on line {}: {line}", index + 1);
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn pomodoro(settings_dir: &Path, overrides: [Option<u32>; 3], interval: Duration) -> ExitCode {
    if let Err(e) = print_help(io::stdout()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let store = FileStore::new(settings_dir);
    let mut session = Session::new(TerminalEffects::new(io::stdout()), store);

    if overrides.iter().any(Option::is_some) {
        let current = *session.settings();
        let [focus, short_break, long_break] = overrides;
        let updated = Settings { focus_time:       focus.unwrap_or(current.focus_time),
                                 short_break_time: short_break.unwrap_or(current.short_break_time),
                                 long_break_time:  long_break.unwrap_or(current.long_break_time), };

        if let Err(e) = session.update_settings(updated) {
            eprintln!("\n{e}");
            return ExitCode::FAILURE;
        }
    }

    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || forward_commands(BufReader::new(io::stdin()), &sender));

    run(&mut session, &receiver, interval);
    println!();
    ExitCode::SUCCESS
}
