//! Typestub CLI
//!
//! Lowers operation fields against a schema and prints the annotations and
//! the stubs a client generator has to emit.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use typestub::codegen::{render::render, OperationDocument, Planner};
use typestub::{lower_field, GeneratorConfig, Schema};

#[derive(Parser)]
#[command(name = "typestub")]
#[command(about = "Lower schema types into client annotations and stub lists")]
struct Cli {
    /// Config file (defaults to typestub.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan stubs for every operation in a document
    Plan {
        /// Schema document (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Operations document (JSON)
        #[arg(short, long)]
        operations: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Lower a single type reference
    Lower {
        /// Schema document (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Type reference, e.g. "[User!]!"
        type_ref: String,

        /// Class name prefix for object stubs
        #[arg(short, long, default_value = "Query")]
        prefix: String,

        /// Directives applied at the field site (e.g. include, skip)
        #[arg(short, long)]
        directive: Vec<String>,
    },

    /// Print the effective configuration, or write it to a file
    Config {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Plan { schema, operations, format } => {
            let schema = Schema::from_path(&schema)
                .with_context(|| format!("loading schema {:?}", schema))?;
            let document = OperationDocument::from_path(&operations)
                .with_context(|| format!("loading operations {:?}", operations))?;

            let plan = Planner::new(&schema, &config.scalars, &config.naming).plan(&document)?;

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
                Format::Text => {
                    for operation in &plan.operations {
                        println!("{}", operation.name);
                        for field in &operation.fields {
                            println!("  {}: {}", field.name, render(&field.annotation, &config.render));
                        }
                    }
                    println!();
                    println!("Stubs ({}):", plan.stubs.len());
                    for stub in plan.stubs.iter() {
                        if stub.local_name == stub.schema_type_name {
                            println!("  {}", stub.local_name);
                        } else {
                            println!("  {} <- {}", stub.local_name, stub.schema_type_name);
                        }
                    }
                    for collision in plan.stubs.collisions() {
                        println!(
                            "  ⚠️  {} claimed by {} and {}",
                            collision.local_name, collision.kept, collision.dropped
                        );
                    }
                    if !plan.imports.is_empty() {
                        println!();
                        println!("Imports ({}):", plan.imports.len());
                        for import in &plan.imports {
                            println!("  {}.{} <- {}", import.module, import.type_name, import.schema_type_name);
                        }
                    }
                }
            }
            Ok(())
        }

        Commands::Lower { schema, type_ref, prefix, directive } => {
            let schema = Schema::from_path(&schema)
                .with_context(|| format!("loading schema {:?}", schema))?;
            let node = schema.resolve(&type_ref)?;
            let lowered = lower_field(&node, &directive, &prefix, &config.scalars)?;

            println!("{}", render(&lowered.annotation, &config.render));
            for reference in &lowered.references {
                println!("  {} <- {}", reference.local_name, reference.schema_type_name);
            }
            Ok(())
        }

        Commands::Config { output } => {
            if let Some(path) = output {
                config.save(&path)?;
                println!("✅ Config written to {:?}", path);
            } else {
                println!("{}", toml::to_string_pretty(&config)?);
            }
            Ok(())
        }
    }
}
