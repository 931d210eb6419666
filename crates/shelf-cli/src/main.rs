//! shelf command-line tool.
//!
//! Runs GraphQL documents against a fresh in-memory store without starting
//! the HTTP server, and prints the schema. Uses the same `ShelfSchema` the
//! server mounts on `/graphql`, so results are identical.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use shelf_server::schema::ShelfSchema;
use shelf_server::state::AppState;
use shelf_storage::{InMemoryStore, SeedData};

/// Query the shelf record store.
#[derive(Parser)]
#[command(name = "shelf", about = "Query the shelf record store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Execute a query or mutation document and print the response.
    Query {
        /// The GraphQL document.
        document: String,

        /// Variables as a JSON object.
        #[arg(short, long)]
        variables: Option<String>,

        /// JSON seed file (default: built-in seed).
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
    /// Print the schema in GraphQL SDL.
    Sdl,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Query {
            document,
            variables,
            seed,
        } => run_query(&document, variables.as_deref(), seed).await,
        Commands::Sdl => match build_schema(None) {
            Ok(schema) => {
                println!("{}", schema.sdl());
                0
            }
            Err(code) => code,
        },
    };
    process::exit(exit_code);
}

/// Execute the query subcommand.
///
/// Returns exit code: 0 = success, 1 = response carries errors,
/// 2 = invalid variables, 3 = seed or schema failure.
async fn run_query(document: &str, variables: Option<&str>, seed: Option<PathBuf>) -> i32 {
    let variables = match variables.map(serde_json::from_str::<serde_json::Value>) {
        Some(Ok(value)) if value.is_object() => Some(value),
        Some(Ok(_)) => {
            eprintln!("Error: variables must be a JSON object");
            return 2;
        }
        Some(Err(e)) => {
            eprintln!("Error: invalid variables JSON: {}", e);
            return 2;
        }
        None => None,
    };

    let schema = match build_schema(seed) {
        Ok(schema) => schema,
        Err(code) => return code,
    };

    let response = schema.execute_document(document, variables).await;
    let has_errors = !response.errors.is_empty();

    // Print the envelope as JSON to stdout for machine-readable output
    let json = serde_json::to_string_pretty(&response)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize response: {}\"}}", e));
    println!("{}", json);

    if has_errors {
        1
    } else {
        0
    }
}

fn build_schema(seed: Option<PathBuf>) -> Result<ShelfSchema, i32> {
    let store = match seed {
        Some(path) => SeedData::from_path(&path)
            .and_then(InMemoryStore::from_seed)
            .map_err(|e| {
                eprintln!("Error: failed to load seed '{}': {}", path.display(), e);
                3
            })?,
        None => InMemoryStore::seeded(),
    };

    AppState::with_store(store, false)
        .map(|state| state.schema)
        .map_err(|e| {
            eprintln!("Error: {}", e);
            3
        })
}
