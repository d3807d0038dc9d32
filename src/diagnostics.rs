//! `ariadne`-backed pretty error reporting for the lex/parse/eval tiers (§7).
//!
//! Builds a byte-indexed `ariadne::Report` with a red label at the
//! offending span, falling back to a plain line if the rich report itself
//! fails to render.

use std::io::Write;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::evaluator::EvalError;
use crate::parser::ParseError;

fn print_range_report(
    out: &mut dyn Write,
    filename: &str,
    source: &str,
    span: Range<usize>,
    message: &str,
) {
    let report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish();

    if report.write((filename, Source::from(source)), &mut *out).is_err() {
        let _ = writeln!(out, "\t{filename}: {message}");
    }
}

/// Reports every accumulated parse error, one `ariadne` block each, per
/// §7's "accumulated during parsing... drained and printed" policy.
pub fn report_parse_errors(out: &mut dyn Write, filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        let start = error.span.offset.min(source.len());
        let end = (start + 1).min(source.len().max(1)).max(start);
        print_range_report(out, filename, source, start..end, &error.message);
    }
}

/// Reports a terminal runtime error for exit-status/diagnostic purposes.
/// Runtime errors stay ordinary `Value`s during evaluation (§7) — this is
/// only invoked by the CLI once a final `Value::Error` has been observed.
pub fn report_eval_error(out: &mut dyn Write, filename: &str, error: &EvalError) {
    let _ = writeln!(out, "{filename}: {error}");
}
