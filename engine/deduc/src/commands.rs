//! The `dedu` subcommands: `eval`, `run`, and `explain`.

use dedu_engine::{DeducedResult, DeductionErrorKind};

use crate::parser::parse_query;

/// Render a deduction result on one line.
pub fn format_result(result: &DeducedResult) -> String {
    if let Some(error) = &result.error {
        return format!("error[{}]: {error}", error.kind.code());
    }
    let param = result
        .param_type
        .as_ref()
        .map_or_else(String::new, ToString::to_string);
    match &result.template_param {
        Some(t) => format!("T = {t}, param = {param}"),
        None => format!("type = {param}"),
    }
}

/// Evaluate one query string, printing the outcome.
///
/// Exit code 0 on successful deduction, 1 on a parse error, 2 when the
/// query parses but deduction fails.
pub fn eval_query(query: &str) -> i32 {
    match parse_query(query) {
        Ok(parsed) => {
            let result = parsed.evaluate();
            println!("{}", format_result(&result));
            i32::from(!result.is_resolved()) * 2
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// Evaluate every query in a file: one per line, blank lines and `#`
/// comments skipped. Deduction errors are part of the output; only parse
/// or I/O failures make the run itself fail.
pub fn run_file(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return 1;
        }
    };

    let mut failed = false;
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_query(line) {
            Ok(parsed) => {
                println!("{line}\n  => {}", format_result(&parsed.evaluate()));
            }
            Err(err) => {
                eprintln!("{path}:{}: error: {err}", index + 1);
                failed = true;
            }
        }
    }
    tracing::debug!(path, failed, "run complete");
    i32::from(failed)
}

/// Explain a deduction error code (`D0001`..`D0004`).
pub fn explain_code(code: &str) -> i32 {
    let wanted = code.to_ascii_uppercase();
    for kind in DeductionErrorKind::ALL {
        if kind.code() == wanted {
            println!("{}: {kind}", kind.code());
            println!();
            println!("{}", kind.explain());
            return 0;
        }
    }
    eprintln!("error: unknown error code `{code}` (known: D0001..D0004)");
    1
}
