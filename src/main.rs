use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use venture_ai::auth::{self, AuthError};
use venture_ai::config::{self, Config};
use venture_ai::output;
use venture_ai::profile::{self, StartupProfile};
use venture_ai::store;
use venture_ai::Predictor;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_STORAGE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a startup profile (default if no subcommand)
    Predict {
        /// Profile file (YAML, or JSON with a .json extension). Prompts when omitted.
        profile: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Save the result to your history (requires login)
        #[arg(long)]
        save: bool,
        /// Fix the random seed used for confidence and market position
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List your saved predictions, newest first
    History {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a saved prediction by its index number
    Show {
        /// Index number of the prediction (1-based, as shown in history)
        index: usize,
    },
    /// Start a session for the given email
    Login {
        #[arg(long)]
        email: String,
        /// Display name (defaults to the part of the email before @)
        #[arg(long)]
        name: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Write a config file with the built-in defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "venture-ai")]
#[command(about = "Score a startup profile and explain the result", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/venture-ai/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn auth_exit(err: &AuthError) -> i32 {
    match err {
        AuthError::InvalidEmail(_) => EXIT_INPUT,
        _ => EXIT_AUTH,
    }
}

fn require_identity() -> Result<auth::Identity, i32> {
    auth::resolve_identity(&auth::get_session_path(), Utc::now()).map_err(|e| {
        eprintln!("Auth error: {}", e);
        auth_exit(&e)
    })
}

fn read_profile(path: Option<PathBuf>) -> Result<StartupProfile, i32> {
    let loaded = match path {
        Some(path) => profile::load_profile(&path),
        None => profile::prompt_for_profile(),
    };
    let profile = loaded.map_err(|e| {
        eprintln!("Input error: {:#}", e);
        EXIT_INPUT
    })?;

    if let Err(errors) = profile::validate_profile(&profile) {
        eprintln!("Profile errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_INPUT);
    }
    Ok(profile)
}

fn run_predict(
    config: &Config,
    path: Option<PathBuf>,
    json: bool,
    save: bool,
    seed: Option<u64>,
) -> Result<(), i32> {
    // Session is checked before the interactive prompt runs
    let identity = if save {
        Some(require_identity()?)
    } else {
        None
    };

    let profile = read_profile(path)?;
    let predictor = Predictor::new(config.scoring.clone(), config.projection.clone());
    let result = match seed {
        Some(seed) => predictor.predict_with(&profile, &mut StdRng::seed_from_u64(seed), Utc::now()),
        None => predictor.predict(&profile),
    };

    if json {
        let text = serde_json::to_string_pretty(&result).map_err(|e| {
            eprintln!("Failed to serialize result: {}", e);
            EXIT_INPUT
        })?;
        println!("{}", text);
    } else {
        let name = profile.startup_name.as_deref().unwrap_or("(unnamed)");
        println!(
            "{}",
            output::format_report(name, &result, output::should_use_colors())
        );
    }

    if let Some(identity) = identity {
        let path = store::get_store_path(&config.data_dir());
        let record = store::append(&path, &identity, &profile, &result, Utc::now()).map_err(|e| {
            eprintln!("Storage error: {:#}", e);
            EXIT_STORAGE
        })?;
        eprintln!("Saved prediction {}", record.id);
    }

    Ok(())
}

fn load_history(config: &Config) -> Result<Vec<store::PredictionRecord>, i32> {
    let identity = require_identity()?;
    store::list(&store::get_store_path(&config.data_dir()), &identity).map_err(|e| {
        eprintln!("Storage error: {:#}", e);
        EXIT_STORAGE
    })
}

fn run_history(config: &Config, json: bool, limit: Option<usize>) -> Result<(), i32> {
    let mut records = load_history(config)?;
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if json {
        let text = serde_json::to_string_pretty(&records).map_err(|e| {
            eprintln!("Failed to serialize history: {}", e);
            EXIT_STORAGE
        })?;
        println!("{}", text);
    } else {
        println!(
            "{}",
            output::format_history_table(&records, Utc::now(), output::should_use_colors())
        );
    }
    Ok(())
}

fn run_show(config: &Config, index: usize) -> Result<(), i32> {
    let records = load_history(config)?;

    // Validate index bounds (1-based)
    if index < 1 || index > records.len() {
        eprintln!(
            "Invalid index {}. Must be between 1 and {}.",
            index,
            records.len()
        );
        return Err(EXIT_INPUT);
    }

    let record = &records[index - 1];
    println!(
        "{}",
        output::format_report(
            record.startup_name(),
            &record.result,
            output::should_use_colors()
        )
    );
    println!();
    println!(
        "Saved {} ago (id {})",
        output::format_age(Utc::now() - record.created_at),
        record.id
    );
    Ok(())
}

fn run_login(config: &Config, email: &str, name: Option<&str>) -> Result<(), i32> {
    let ttl = config.session_ttl().map_err(|e| {
        eprintln!("Config error: session_ttl: {}", e);
        EXIT_CONFIG
    })?;

    let session = auth::login(email, name, ttl, Utc::now()).map_err(|e| {
        eprintln!("Auth error: {}", e);
        auth_exit(&e)
    })?;

    auth::save_session(&auth::get_session_path(), &session).map_err(|e| {
        eprintln!("Storage error: {:#}", e);
        EXIT_STORAGE
    })?;

    println!("Logged in as {} <{}>", session.name, session.email);
    Ok(())
}

fn run_logout() -> Result<(), i32> {
    match auth::clear_session(&auth::get_session_path()) {
        Ok(true) => println!("Logged out."),
        Ok(false) => println!("Not logged in."),
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            return Err(EXIT_STORAGE);
        }
    }
    Ok(())
}

fn run_whoami() -> Result<(), i32> {
    let now = Utc::now();
    let session = auth::load_active_session(&auth::get_session_path(), now).map_err(|e| {
        eprintln!("Auth error: {}", e);
        auth_exit(&e)
    })?;
    println!("{}", output::format_session(&session, now));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    venture_ai::logging::init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Predict {
        profile: None,
        json: false,
        save: false,
        seed: None,
    });

    // init must work even when the existing config is broken
    if let Commands::Init { force } = command {
        let path = cli.config.unwrap_or_else(config::get_config_path);
        if let Err(e) = config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Config written to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let outcome = match command {
        Commands::Predict {
            profile,
            json,
            save,
            seed,
        } => run_predict(&config, profile, json, save, seed),
        Commands::History { json, limit } => run_history(&config, json, limit),
        Commands::Show { index } => run_show(&config, index),
        Commands::Login { email, name } => run_login(&config, &email, name.as_deref()),
        Commands::Logout => run_logout(),
        Commands::Whoami => run_whoami(),
        Commands::Init { .. } => Ok(()),
    };

    match outcome {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(code) => std::process::exit(code),
    }
}
