//! Interactive REPL loop (§6.1), built on `rustyline`.
//!
//! One `rustyline::DefaultEditor` per session. A line ending in `\` buffers
//! and re-prompts with `"... "` until a line without the trailing backslash
//! closes the statement; the literal line `exit` terminates the loop;
//! Ctrl-C clears the in-progress line without exiting; Ctrl-D (EOF) exits
//! cleanly. Each completed chunk of source is lexed, parsed, and evaluated
//! against an environment that persists across the whole session, so
//! bindings from one line are visible to the next.
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::ast::print_program;
use crate::cli::{self, Cli, CliError, Mode};
use crate::diagnostics;
use crate::environment::Environment;
use crate::evaluator::{self, EvalError};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;

const PROMPT: &str = ">>> ";
const CONTINUATION_PROMPT: &str = "... ";

/// Runs the REPL until `exit` or EOF. Parse/eval errors are reported per
/// line and never stop the session; only a host I/O failure does.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new().map_err(|source| CliError::FileRead {
        path: std::path::PathBuf::from("<repl>"),
        source: std::io::Error::new(std::io::ErrorKind::Other, source.to_string()),
    })?;

    if !cli.quiet {
        let _ = writeln!(out, "interprete REPL — type 'exit' to quit");
    }

    let env = Environment::new_root();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
        match editor.readline(prompt) {
            Ok(line) => {
                if buffer.is_empty() && line.trim() == "exit" {
                    break;
                }

                if let Some(stripped) = line.strip_suffix('\\') {
                    buffer.push_str(stripped);
                    buffer.push('\n');
                    continue;
                }

                buffer.push_str(&line);
                let _ = editor.add_history_entry(buffer.as_str());
                let source = std::mem::take(&mut buffer);
                eval_line(cli, &source, &env, out);
            }
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(_) => break,
        }
    }

    Ok(())
}

fn eval_line(
    cli: &Cli,
    source: &str,
    env: &std::rc::Rc<std::cell::RefCell<Environment>>,
    out: &mut dyn Write,
) {
    if cli.mode == Mode::Lexer {
        cli::run_lexer_mode(source, out);
        return;
    }

    let mut parser = Parser::new(Lexer::new(source));
    let (program, errors) = parser.parse_program();
    if !errors.is_empty() {
        diagnostics::report_parse_errors(out, "<repl>", source, &errors);
        return;
    }

    if cli.mode == Mode::Parser {
        let _ = write!(out, "{}", print_program(&program));
        return;
    }

    let value = evaluator::eval_program(&program, env);
    let _ = writeln!(out, "{}", value.inspect());
    if let Value::Error(message) = &value {
        diagnostics::report_eval_error(out, "<repl>", &EvalError::new(message.clone()));
    }
}
