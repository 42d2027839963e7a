//! Production plan service entry point: CLI wiring, config loading, and serving.

use std::path::Path;
use std::process;

use tracing::error;

use production_plan::config::ServiceConfig;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

fn print_help() {
    eprintln!("production-plan: merit-order production plan HTTP service");
    eprintln!();
    eprintln!("Usage: production-plan [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load service config from TOML file");
    eprintln!("  --host <addr>            Bind address (default: 0.0.0.0)");
    eprintln!("  --port <u16>             Bind port (default: 8888)");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("RUST_LOG overrides the configured log filter.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        host: None,
        port: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--host" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --host requires an address argument");
                    process::exit(1);
                }
                cli.host = Some(args[i].clone());
            }
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config file if given, otherwise defaults
    let mut config = if let Some(ref path) = cli.config_path {
        match ServiceConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ServiceConfig::default()
    };

    // CLI flags win over the file
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    production_plan::logging::init(&config.logging.filter);

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(%e, "invalid bind address");
            process::exit(1);
        }
    };

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        error!(%e, "failed to create tokio runtime");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(production_plan::api::serve(&config.server, addr)) {
        error!(%e, %addr, "server error");
        process::exit(1);
    }
}
