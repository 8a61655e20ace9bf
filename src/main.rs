use std::{
    fs,
    io::{self, BufRead, Write},
    thread,
};

use clap::Parser;
use log::info;
use minic::{
    Session,
    error::Error,
    interpreter::{
        evaluator::core::{Context, DEFAULT_EPSILON, DEFAULT_MAX_CALL_DEPTH},
        value::core::Value,
    },
};

/// minic is an interactive interpreter for a small, dynamically typed,
/// C-like language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minic to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that only prints out the last printable value
    /// of a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Two floats closer than this compare equal.
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Calls nested deeper than this are reported as errors.
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Script to run. Without it, statements are read interactively from
    /// standard input.
    contents: Option<String>,
}

/// Lines typed at the terminal, each requested with a prompt.
struct Prompt {
    stdin: io::StdinLock<'static>,
}

impl Iterator for Prompt {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        print!("> ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

/// Stack size of the interpreter thread. Each nested call costs a handful of
/// evaluator frames, so the main thread's stack is too small for deep
/// recursion.
const INTERPRETER_STACK: usize = 256 * 1024 * 1024;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let interpreter = thread::Builder::new().name("interpreter".to_string())
                                            .stack_size(INTERPRETER_STACK)
                                            .spawn(move || run(args));
    match interpreter.map(thread::JoinHandle::join) {
        Ok(Ok(())) => {},
        Ok(Err(_)) => std::process::exit(101),
        Err(e) => {
            eprintln!("Failed to start the interpreter: {e}");
            std::process::exit(1);
        },
    }
}

fn run(args: Args) {
    let context = Context::with_epsilon(args.epsilon).with_max_depth(args.max_depth);

    let Some(contents) = args.contents else {
        println!("Program starts...");
        let session = Session::with_context(Prompt { stdin: io::stdin().lock() }, context);
        for outcome in session {
            report(outcome);
        }
        println!("Program exits...");
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not \
                       exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    info!("running script of {} lines", script.lines().count());
    let session = Session::with_context(script.lines().map(String::from), context);
    let mut last = None;
    for outcome in session {
        if args.pipe_mode {
            match outcome {
                Ok(Value::Null) => {},
                Ok(value) => last = Some(value),
                Err(e) => eprintln!("{e}"),
            }
        } else {
            report(outcome);
        }
    }
    if let Some(value) = last {
        println!("{value}");
    }
}

/// Prints one statement's outcome: values on stdout, errors on stderr.
fn report(outcome: Result<Value, Error>) {
    match outcome {
        Ok(Value::Null) => {},
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
