//! dedu CLI
//!
//! Type-deduction simulator: evaluates template / auto / decltype
//! deduction queries and prints the types a conforming compiler deduces.

use deduc::commands::{eval_query, explain_code, run_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let code = match command.as_str() {
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: dedu eval \"<query>\"");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  dedu eval \"template: const T& <- lvalue const int\"");
                eprintln!("  dedu eval \"auto: T <- {{int, int, int}}\"");
                eprintln!("  dedu eval \"decltype: paren const int\"");
                std::process::exit(1);
            }
            eval_query(&args[2])
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: dedu run <file>");
                eprintln!();
                eprintln!("One query per line; blank lines and # comments are skipped.");
                std::process::exit(1);
            }
            run_file(&args[2])
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: dedu explain <code>   (D0001..D0004)");
                std::process::exit(1);
            }
            explain_code(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("dedu — C++ type-deduction simulator");
    println!();
    println!("Usage: dedu <command> [args]");
    println!();
    println!("Commands:");
    println!("  eval <query>     Evaluate one deduction query");
    println!("  run <file>       Evaluate queries from a file");
    println!("  explain <code>   Explain a deduction error code");
    println!("  help             Show this message");
    println!();
    println!("Queries:  <mode>: <pattern> <- <argument>");
    println!("  modes:     template, auto, auto-return, auto-lambda,");
    println!("             decltype, decltype-auto, decltype-auto-return");
    println!("  patterns:  T, T&, const T&, T&&, T*, const T*, init-list");
    println!("  arguments: [lvalue|rvalue|xvalue|prvalue] <type>,");
    println!("             {{int, int}}, overload[(signature)], bitfield <type>,");
    println!("             static-const[-defined] <type>");
    println!();
    println!("Set DEDU_LOG (e.g. DEDU_LOG=trace) for engine tracing.");
}

/// Route tracing to stderr, filtered by `DEDU_LOG` (default: warnings).
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("DEDU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
