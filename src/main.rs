//! loxbagel CLI
//!
//! Scans a script file, or reads lines from an interactive prompt, and prints
//! the resulting tokens.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use log::{debug, info};
use loxbagel::{Diagnostic, Lox, LoxError, LoxResult, Token};

enum Mode {
    Prompt,
    Script(String),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|mode| match mode {
        Mode::Prompt => run_prompt(),
        Mode::Script(path) => run_file(&path),
    });

    if let Err(e) = result {
        match e {
            LoxError::UsageError { .. } => eprintln!("{}", e.message()),
            // Already shown with source context by report_errors
            LoxError::LexerError { .. } => {}
            _ => eprint!("{}", Diagnostic::new(&e)),
        }
        process::exit(e.exit_code());
    }
}

fn parse_args(args: &[String]) -> LoxResult<Mode> {
    match args {
        [] => Ok(Mode::Prompt),
        [path] => Ok(Mode::Script(path.clone())),
        _ => Err(LoxError::usage_error("Usage: loxbagel [script]")),
    }
}

/// Scan a script file. Fails with the first lexical error if any were reported.
fn run_file(path: &str) -> LoxResult<()> {
    let source = fs::read_to_string(path)
        .map_err(|e| LoxError::io_error(format!("Failed to read file '{}': {}", path, e)))?;
    info!("scanning {} ({} bytes)", path, source.len());

    let mut lox = Lox::with_filename(path);
    let tokens = lox.run(&source);
    print_tokens(&tokens);
    report_errors(&lox, &source);

    match lox.errors().first() {
        Some(error) => Err(error.clone()),
        None => Ok(()),
    }
}

/// Read and scan one line at a time until an empty line or end of input
fn run_prompt() -> LoxResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut lox = Lox::new();

    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| LoxError::io_error(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| LoxError::io_error(format!("Error reading input: {}", e)))?;

        let line = line.trim_end_matches(&['\n', '\r'][..]);
        if read == 0 || line.is_empty() {
            debug!("prompt finished");
            break;
        }

        let tokens = lox.run(line);
        print_tokens(&tokens);
        report_errors(&lox, line);
        lox.clear_error();
    }

    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn report_errors(lox: &Lox, source: &str) {
    for error in lox.errors() {
        eprint!("{}", Diagnostic::with_source(error, source));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn script(name: &str, source: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("loxbagel-main-{}-{}.lox", process::id(), name));
        fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_parse_args() {
        assert!(matches!(parse_args(&[]), Ok(Mode::Prompt)));
        assert!(matches!(
            parse_args(&["a.lox".to_string()]),
            Ok(Mode::Script(ref path)) if path == "a.lox"
        ));
        let err = parse_args(&["a".to_string(), "b".to_string()]).err().unwrap();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_run_file_reports_first_lexical_error() {
        let path = script("errors", "var a = @;\n\"open");
        let err = run_file(path.to_str().unwrap()).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert_eq!(err.message(), "Unexpected character '@'.");
        assert_eq!(err.location().map(|l| l.line), Some(1));
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn test_run_file_clean_script() {
        let path = script("clean", "print 1;");
        let result = run_file(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_run_file_missing_script() {
        let err = run_file("definitely/not/a/real/file.lox").unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
