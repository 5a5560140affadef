use rust_calc::frontend::evaluate;

use clap::Parser;
use io::Write;
use std::{io, process};

/// Evaluates arithmetic expressions.
#[derive(Parser)]
#[clap(name = "rust-calc", version)]
struct Args {
    /// Expression to evaluate; starts an interactive prompt when omitted.
    expression: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if args.expression.is_empty() {
        run_prompt();
    } else {
        let source = args.expression.join(" ");
        match evaluate(&source) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("{}", err.render(&source));
                process::exit(65);
            }
        }
    }
}

fn run_prompt() {
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");

        // EOF ends the session
        if bytes_read == 0 {
            break;
        }

        let source = input.trim_end();
        if source.is_empty() {
            continue;
        }

        match evaluate(source) {
            Ok(value) => println!("{}", value),
            Err(err) => println!("{}", err.render(source)),
        }
    }
}
