//! Guild balance simulator CLI.
//!
//! Run Monte Carlo quest attempts or whole guild seasons to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Rank matrix, 500 runs per cell
//!   cargo run --bin simulate -- -n 100 --seed 42    # Reproducible smaller matrix
//!   cargo run --bin simulate -- --season --days 365 # Full guild seasons
//!   cargo run --bin simulate -- --formula flat      # A/B the flat party formula

use guildhall::adventure::FormulaKind;
use guildhall::simulator::{run_matrix, run_season, SimConfig};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };
    let config = &options.config;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║               GUILDHALL BALANCE SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Formula:        {}", config.formula.name());
    println!("  Party Size:     {}", config.party_size);
    if options.season {
        println!("  Guilds:         {}", config.season_runs);
        println!("  Days:           {}", config.season_days);
    } else {
        println!("  Runs per Cell:  {}", config.num_runs);
        println!("  Quest Type:     {:?}", config.quest_type);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let (text, json) = if options.season {
        let report = run_season(config);
        (report.to_text(), report.to_json())
    } else {
        let report = run_matrix(config);
        (report.to_text(), report.to_json())
    };
    println!("{}", text);

    if options.json {
        let filename = format!("sim_report_{}.json", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("error: failed to write {filename}: {e}");
                std::process::exit(1);
            }
        }
    }
}

struct Options {
    config: SimConfig,
    season: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    // A config file is the base; flags given alongside it override its fields
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).ok_or("--config needs a file path")?;
            SimConfig::from_json_file(Path::new(path)).map_err(|e| format!("{path}: {e}"))?
        }
        None => SimConfig::default(),
    };
    let mut season = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = value(args, i)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(value(args, i)?);
                i += 1;
            }
            "-d" | "--days" => {
                config.season_days = value(args, i)?;
                i += 1;
            }
            "-p" | "--party" => {
                config.party_size = value(args, i)?;
                i += 1;
            }
            "-f" | "--formula" => {
                let name: String = value(args, i)?;
                config.formula = FormulaKind::parse(&name).ok_or(format!("unknown formula '{name}'"))?;
                config.formula_params = None;
                i += 1;
            }
            "--config" => {
                i += 1;
            }
            "--season" => {
                season = true;
            }
            "--json" => {
                json = true;
            }
            "--quick" => {
                config = SimConfig {
                    seed: config.seed,
                    ..SimConfig::quick()
                };
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
        i += 1;
    }

    Ok(Options { config, season, json })
}

fn value<T: std::str::FromStr>(args: &[String], i: usize) -> Result<T, String> {
    let flag = &args[i];
    let raw = args.get(i + 1).ok_or(format!("{flag} needs a value"))?;
    raw.parse().map_err(|_| format!("invalid value '{raw}' for {flag}"))
}

fn print_help() {
    println!("Guildhall Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Quest attempts per matrix cell (default: 500)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -d, --days <D>       Days per guild season (default: 180)");
    println!("    -p, --party <P>      Party size for matrix runs (default: 3)");
    println!("    -f, --formula <F>    Combat formula: standard | flat");
    println!("    --config <FILE>      Load a JSON SimConfig; other flags override it");
    println!("    --season             Run guild seasons instead of the rank matrix");
    println!("    --quick              Small run for smoke checks");
    println!("    --json               Save JSON report");
    println!("    -v, --verbose        Log each cell or season as it finishes");
    println!("    -h, --help           Show this help");
    println!();
    println!("Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=debug) to change it.");
}
