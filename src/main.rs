use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use reckon::{
    Environment, evaluate_script, format_outcome,
    interpreter::{lexer::Tokenizer, token::TokenKind},
    parse_and_evaluate,
};
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";

/// reckon evaluates arithmetic one line at a time, remembering variables
/// between lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read CONTENTS as the path of a script and evaluate its
    /// lines in one session.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the tokens of every line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// History file for the interactive prompt.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// A line to evaluate, or a script path with `--file`. Without it an
    /// interactive prompt starts.
    contents: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut environment = Environment::new();

    let succeeded = match &args.contents {
        None => run_prompt(&mut environment, &args),
        Some(path) if args.file => match fs::read_to_string(path) {
            Ok(script) => run_source(&script, &mut environment, args.tokens),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist? ({e})");
                false
            },
        },
        Some(line) => run_source(line, &mut environment, args.tokens),
    };

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Evaluates (or tokenizes) every non-blank line of `source`, printing one
/// result per line. Returns whether every line succeeded.
fn run_source(source: &str, environment: &mut Environment, tokens: bool) -> bool {
    if tokens {
        return source.lines()
                     .filter(|line| !line.trim().is_empty())
                     .fold(true, |ok, line| print_tokens(line) && ok);
    }

    let outcomes = evaluate_script(source, environment);
    for outcome in &outcomes {
        println!("{}", format_outcome(outcome));
    }

    outcomes.iter().all(Result::is_ok)
}

fn run_prompt(environment: &mut Environment, args: &Args) -> bool {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return false;
        },
    };

    if let Some(path) = &args.history
       && let Err(e) = editor.load_history(path)
    {
        log::warn!("could not load history from {}: {e}", path.display());
    }

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return false;
            },
        };

        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            log::warn!("could not record history entry: {e}");
        }

        if line.trim() == ":vars" {
            for (name, value) in environment.bindings() {
                println!("{name} = {value}");
            }
        } else if args.tokens {
            print_tokens(&line);
        } else {
            println!("{}", format_outcome(&parse_and_evaluate(&line, environment)));
        }
    }

    if let Some(path) = &args.history
       && let Err(e) = editor.save_history(path)
    {
        log::warn!("could not save history to {}: {e}", path.display());
    }

    true
}

/// Prints every token of `line`, ending with `END_OF_INPUT`. Returns `false`
/// if the line contained an invalid character.
fn print_tokens(line: &str) -> bool {
    let mut ok = true;
    let mut tokenizer = Tokenizer::new(line);

    loop {
        match tokenizer.next_token() {
            Ok(token) => {
                println!("{token}");
                if token.is(TokenKind::EndOfInput) {
                    break;
                }
            },
            Err(e) => {
                println!("Error: {e}");
                ok = false;
            },
        }
    }

    ok
}
