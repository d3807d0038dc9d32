//! Command-line surface: argument parsing, mode dispatch, timeout enforcement (§6.1).

use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser as ClapParser, ValueEnum};

use crate::ast::print_program;
use crate::environment::Environment;
use crate::evaluator::{self, EvalError};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;
use crate::{diagnostics, repl};

/// What a run produces: a token dump, a pretty-printed AST, or an evaluated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Lexer,
    Parser,
    Eval,
}

/// A tree-walking interpreter for a small Spanish-keyword scripting language.
#[derive(Debug, ClapParser)]
#[command(name = "interprete")]
#[command(about = "A tree-walking interpreter for a small Spanish-keyword scripting language")]
pub struct Cli {
    /// What the run should produce: lex tokens, a parsed AST, or an evaluated value.
    #[arg(long, value_enum, default_value_t = Mode::Eval)]
    pub mode: Mode,

    /// Source file to run. If absent and stdin is a TTY, starts the REPL;
    /// if absent and stdin is piped, evaluates it once.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output path for normal results (default stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output path for diagnostics (default stderr).
    #[arg(long = "err")]
    pub err: Option<PathBuf>,

    /// Suppresses the REPL startup banner.
    #[arg(long)]
    pub quiet: bool,

    /// Wall-clock execution budget, in milliseconds.
    #[arg(long = "max-time", default_value_t = 40_000)]
    pub max_time: u64,
}

/// A fatal, host-level failure (§7 tier 1): file not found, I/O failure.
/// Exceeding `--max-time` is not one of these — it surfaces as an ordinary
/// `Value::Error` from the evaluator (see `eval_with_deadline`), the same
/// way every other runtime error does.
#[derive(Debug)]
pub enum CliError {
    FileRead { path: PathBuf, source: std::io::Error },
    OutputOpen { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::FileRead { path, source } => {
                write!(f, "could not read '{}': {source}", path.display())
            }
            CliError::OutputOpen { path, source } => {
                write!(f, "could not open '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Runs the CLI. Returns the process exit code; parse/eval errors are
/// reported on the error stream but never change it — only host errors do.
pub fn run(cli: Cli) -> Result<i32, CliError> {
    let mut out = open_writer(cli.output.as_deref(), false)?;
    let mut err_out = open_writer(cli.err.as_deref(), true)?;

    let source = match &cli.file {
        Some(path) => Some(read_source(path)?),
        None => {
            if std::io::stdin().is_terminal() {
                None
            } else {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| CliError::FileRead {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Some(buf)
            }
        }
    };

    let filename = cli
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    match source {
        Some(source) => {
            run_once(&cli, &filename, &source, &mut out, &mut err_out)?;
            Ok(0)
        }
        None => {
            repl::run(&cli, &mut out)?;
            Ok(0)
        }
    }
}

fn run_once(
    cli: &Cli,
    filename: &str,
    source: &str,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> Result<(), CliError> {
    match cli.mode {
        Mode::Lexer => {
            run_lexer_mode(source, out);
            Ok(())
        }
        Mode::Parser => {
            run_parser_mode(filename, source, out, err_out);
            Ok(())
        }
        Mode::Eval => run_eval_mode(cli, filename, source, out, err_out),
    }
}

pub(crate) fn run_lexer_mode(source: &str, out: &mut dyn Write) {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == crate::token::TokenKind::Eof;
        let _ = writeln!(
            out,
            "[Type: {}, Literal: '{}']",
            token.kind.name(),
            token.literal()
        );
        if is_eof {
            break;
        }
    }
    let _ = writeln!(out);
}

fn run_parser_mode(filename: &str, source: &str, out: &mut dyn Write, err_out: &mut dyn Write) {
    let mut parser = Parser::new(Lexer::new(source));
    let (program, errors) = parser.parse_program();
    if !errors.is_empty() {
        diagnostics::report_parse_errors(err_out, filename, source, &errors);
        return;
    }
    let _ = write!(out, "{}", print_program(&program));
}

fn run_eval_mode(
    cli: &Cli,
    filename: &str,
    source: &str,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut parser = Parser::new(Lexer::new(source));
    let (program, errors) = parser.parse_program();
    if !errors.is_empty() {
        diagnostics::report_parse_errors(err_out, filename, source, &errors);
        return Ok(());
    }

    let value = eval_with_deadline(&program, cli.max_time);
    let _ = writeln!(out, "{}", value.inspect());
    if let Value::Error(message) = &value {
        diagnostics::report_eval_error(err_out, filename, &EvalError::new(message.clone()));
    }
    Ok(())
}

/// Evaluates `program` against a fresh root environment carrying a
/// `max_time`-millisecond deadline (§5, §6.1). A `Value` holds an
/// `Rc<RefCell<_>>` closure environment, which is `!Send` — it cannot cross
/// a real OS thread boundary, so the budget is enforced cooperatively: the
/// evaluator checks the deadline between statements rather than being
/// pre-empted from the outside.
pub(crate) fn eval_with_deadline(program: &crate::ast::Program, max_time: u64) -> Value {
    let env = Environment::new_root();
    Environment::set_deadline(&env, Instant::now() + Duration::from_millis(max_time));
    evaluator::eval_program(program, &env)
}

fn read_source(path: &PathBuf) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.clone(),
        source,
    })
}

fn open_writer(path: Option<&std::path::Path>, stderr_by_default: bool) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).map_err(|source| CliError::OutputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None if stderr_by_default => Ok(Box::new(std::io::stderr())),
        None => Ok(Box::new(std::io::stdout())),
    }
}
