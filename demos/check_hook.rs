use clap::{Parser, ValueEnum};
use hookcheck::{CheckHook, CheckerBuilder, MultiMatch};
use serde_json::{Value, from_str};
use std::env;
use std::fs;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    First,
    Any,
    All,
}

impl From<Policy> for MultiMatch {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::First => MultiMatch::First,
            Policy::Any => MultiMatch::Any,
            Policy::All => MultiMatch::All,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate check-hook conditions against a JSON document")]
struct Args {
    /// Path to the JSON document to check
    document: String,

    /// A condition to evaluate; may be repeated
    #[arg(short, long = "expr")]
    exprs: Vec<String>,

    /// A JSON file holding an array of `{ "name": ..., "condition": ... }` hooks
    #[arg(long)]
    hooks: Option<String>,

    /// How references matching several nodes are compared
    #[arg(long, value_enum, default_value_t = Policy::First)]
    multi_match: Policy,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "hookcheck=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let document: Value = from_str(&fs::read_to_string(&args.document)?)?;
    println!("✓ Document loaded from {}", args.document);

    let mut hooks: Vec<CheckHook> = match &args.hooks {
        Some(path) => from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };
    hooks.extend(
        args.exprs
            .iter()
            .enumerate()
            .map(|(i, expr)| CheckHook::new(format!("expr-{}", i + 1), expr.as_str())),
    );
    if hooks.is_empty() {
        eprintln!("No conditions given. Use --expr or --hooks.");
        return Ok(ExitCode::from(2));
    }

    let checker = CheckerBuilder::new()
        .with_multi_match(args.multi_match.into())
        .build()?;

    let mut all_satisfied = true;
    for outcome in checker.check_all(&document, &hooks) {
        match &outcome.result {
            Ok(true) => println!("  PASS  {}", outcome.name),
            Ok(false) => println!("  FAIL  {}", outcome.name),
            Err(e) => println!("  ERROR {}: {}", outcome.name, e),
        }
        all_satisfied &= outcome.is_satisfied();
    }

    Ok(if all_satisfied { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
