use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::debug;

use mealbook::{Command, Flow, MealStore, Session, SessionError, command, render};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the meal store file; prompted for when omitted
    store: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize env_logger; For logging to STDOUT/STDERR
    env_logger::init();

    let cli = Cli::parse();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let path = match cli.store {
        Some(path) => path,
        None => match read_line(&mut stdin, &mut stdout, "Meal store file: ") {
            Ok(Some(line)) => PathBuf::from(line),
            Ok(None) => return ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    println!("Connecting to meal store...");
    let store = match MealStore::open(&path) {
        Ok(store) => {
            println!("Connected!");
            store
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new();
    loop {
        println!();
        if session.take_redisplay() {
            println!("Current query [{}]", session.describe_query());
            match session.refresh(&store) {
                Ok(meals) => print!("{}", render(meals)),
                Err(e) => eprintln!("{e}"),
            }
            println!();
        }

        let line = match read_line(&mut stdin, &mut stdout, "> ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        };

        match Command::try_from(line.as_str()) {
            Ok(cmd) => {
                if matches!(cmd, Command::Help) {
                    println!("{}", command::HELP);
                }
                match session.execute(cmd, &store) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e @ SessionError::BadPosition { .. }) => {
                        debug!("rejected: {e}");
                        println!("Invalid command.");
                    }
                    Err(SessionError::Storage(e)) => eprintln!("storage error: {e}"),
                }
            }
            Err(e) => {
                debug!("rejected: {e}");
                println!("Invalid command.");
            }
        }
    }

    store.close();
    ExitCode::SUCCESS
}

/// Prompt for and read one line; `None` means input was closed.
fn read_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
