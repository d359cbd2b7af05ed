// crates/weftcli/src/main.rs

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use weftcore::{FlowVariable, Settings, VariableType, VariableTypeRegistry};

/// Settings key the variable sub-trees live under.
const CFG_VARIABLES: &str = "variables";

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Flow variable toolbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered variable types
    Types,

    /// Inspect the variables stored in a file
    Inspect {
        /// Path to a variables JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Convert a stored variable to another type
    Convert {
        /// Path to a variables JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Name of the variable to convert
        #[arg(short, long)]
        name: String,

        /// Identifier of the target type (e.g. DOUBLE)
        #[arg(short, long)]
        to: String,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create an example variables file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "variables.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => {
            list_types();
        }

        Commands::Inspect { file } => {
            inspect_variables(file)?;
        }

        Commands::Convert {
            file,
            name,
            to,
            verbose,
        } => {
            // Initialize logging
            if verbose {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::DEBUG)
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::INFO)
                    .init();
            }

            convert_variable(file, &name, &to)?;
        }

        Commands::Init { output } => {
            create_example_variables(output)?;
        }
    }

    Ok(())
}

fn list_types() {
    println!("📦 Registered variable types:");
    println!();

    for vtype in VariableTypeRegistry::global().all_types() {
        let targets = vtype
            .convertible_types()
            .iter()
            .map(|t| t.identifier().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  • {} (converts to: {})", vtype.identifier(), targets);
    }
}

fn inspect_variables(file: PathBuf) -> Result<()> {
    println!("🔍 Inspecting variables: {}", file.display());
    println!();

    let variables = read_variables(&file)?;

    println!("✅ Loaded {} variable(s):", variables.len());
    for variable in &variables {
        println!(
            "  • {} ({}): {}",
            variable.name(),
            variable.variable_type().identifier(),
            variable.value()
        );
    }

    Ok(())
}

fn convert_variable(file: PathBuf, name: &str, to: &str) -> Result<()> {
    let variables = read_variables(&file)?;

    let variable = variables
        .iter()
        .find(|v| v.name() == name)
        .ok_or_else(|| anyhow!("No variable named '{}' in {}", name, file.display()))?;

    let target = VariableTypeRegistry::global().resolve(to)?;
    let converted = variable.value().get_as(target)?;

    println!(
        "✨ {} ({} -> {}): {}",
        variable.name(),
        variable.variable_type().identifier(),
        target.identifier(),
        converted
    );

    Ok(())
}

fn create_example_variables(output: PathBuf) -> Result<()> {
    use weftcore::types::{DoubleType, IntType, StringArrayType, StringType};

    let variables = vec![
        FlowVariable::new("retries", IntType.new_value(3)),
        FlowVariable::new("threshold", DoubleType.new_value(0.75)),
        FlowVariable::new("endpoint", StringType.new_value("https://example.com/api")),
        FlowVariable::new(
            "columns",
            StringArrayType.new_value(vec!["id".to_string(), "name".to_string()]),
        ),
    ];

    // Each variable gets its own numbered sub-tree
    let mut vars_tree = Settings::new();
    for (i, variable) in variables.iter().enumerate() {
        let mut sub = Settings::new();
        variable.save(&mut sub)?;
        vars_tree.set_tree(i.to_string(), sub);
    }

    let mut settings = Settings::new();
    settings.set_tree(CFG_VARIABLES, vars_tree);

    let json = serde_json::to_string_pretty(&settings)?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✨ Created example variables file: {}", output.display());
    println!();
    println!("Inspect it with:");
    println!("  weft inspect --file {}", output.display());

    Ok(())
}

fn read_variables(file: &Path) -> Result<Vec<FlowVariable>> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let settings: Settings = serde_json::from_str(&json)
        .with_context(|| format!("Invalid JSON in {}", file.display()))?;

    let registry = VariableTypeRegistry::global();
    let vars_tree = settings.get_tree(CFG_VARIABLES)?;

    let mut variables = Vec::new();
    for key in vars_tree.keys() {
        let sub = vars_tree.get_tree(key)?;
        let variable = FlowVariable::load(registry, sub)
            .with_context(|| format!("Failed to load variable entry '{}'", key))?;
        variables.push(variable);
    }

    Ok(variables)
}
