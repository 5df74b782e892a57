use clap::{Args, Parser, Subcommand, ValueEnum};
use qbuilder::{dialect_from_name, Catalog, Command, Markup, Options, Session};
use serde_json::json;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Replays query builder sessions and prints the resulting SQL
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Apply a JSON array of commands to a fresh session
    Render(RenderArgs),
    /// List the tables of a schema with their columns
    Tables(SchemaArgs),
    /// List the references reachable from one table
    Related(RelatedArgs),
}

#[derive(Debug, Args)]
struct SchemaArgs {
    /// Path to the schema JSON file
    #[arg(short, long)]
    schema: String,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    schema: SchemaArgs,
    /// `mysql` or `oracle`
    #[arg(short, long, default_value = "oracle")]
    dialect: String,
    /// Prefix for table names
    #[arg(long)]
    schema_name: Option<String>,
    /// Print bare SQL instead of HTML markup
    #[arg(long)]
    plain: bool,
    /// Offer WHERE-IN sub queries in the menu output
    #[arg(long)]
    show_where_in: bool,
    #[arg(short, long, value_enum, default_value_t = Output::Sql)]
    output: Output,
    /// Path to the command script. If empty, stdin will be used.
    script: Option<String>,
}

#[derive(Debug, Args)]
struct RelatedArgs {
    #[command(flatten)]
    schema: SchemaArgs,
    #[arg(short, long)]
    table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// The final SQL
    Sql,
    /// The final query state as JSON
    State,
    /// One line per applied command, followed by the final SQL
    Steps,
    /// What the menu would offer next, as JSON
    Menu,
}

fn get_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read `{path}`: {e}"))
}

fn load_catalog(args: &SchemaArgs) -> Result<Catalog, String> {
    Catalog::from_json(&read_file(&args.schema)?).map_err(|e| e.to_string())
}

fn render(args: RenderArgs) -> Result<(), String> {
    let script = match &args.script {
        Some(path) => read_file(path)?,
        None => get_stdin()?,
    };
    let commands: Vec<Command> =
        serde_json::from_str(&script).map_err(|e| format!("Invalid command script: {e}"))?;
    let options = Options {
        dialect: dialect_from_name(&args.dialect).map_err(|e| e.to_string())?,
        schema_name: args.schema_name,
        markup: if args.plain { Markup::Plain } else { Markup::Html },
        show_where_in_button: args.show_where_in,
        ..Options::default()
    };
    let mut session = Session::new(load_catalog(&args.schema)?, options);
    info!(commands = commands.len(), "replaying script");
    for command in commands {
        let applied = session.apply(command).map_err(|e| e.to_string())?;
        if args.output == Output::Steps {
            println!("-- {}", applied.description);
        }
    }
    match args.output {
        Output::Sql | Output::Steps => println!("{}", session.sql()),
        Output::State => println!("{}", session.state_json().map_err(|e| e.to_string())?),
        Output::Menu => {
            let menu = json!({
                "selectableTables": session.selected_table_alias_pairs().map_err(|e| e.to_string())?,
                "possibleLeftJoins": session.possible_left_joins().map_err(|e| e.to_string())?,
                "showWhereIn": session.show_where_in_action(),
            });
            let json = serde_json::to_string_pretty(&menu).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

fn tables(args: SchemaArgs) -> Result<(), String> {
    let catalog = load_catalog(&args)?;
    for table in catalog.all_tables() {
        match &table.alias {
            Some(alias) => println!("{} ({alias})", table.name),
            None => println!("{}", table.name),
        }
        for (column, column_type) in &table.columns {
            println!("    {column}: {column_type}");
        }
    }
    Ok(())
}

fn related(args: RelatedArgs) -> Result<(), String> {
    let catalog = load_catalog(&args.schema)?;
    let references = catalog
        .related_references(&args.table)
        .map_err(|e| e.to_string())?;
    for reference in references {
        let direction = if reference.reversed { "<-" } else { "->" };
        let variants = reference
            .join_variants
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        print!(
            "{}.{} {direction} {}.{}",
            reference.source_table,
            reference.source_column,
            reference.target_table,
            reference.target_column
        );
        if variants.is_empty() {
            println!();
        } else {
            println!(" [{variants}]");
        }
    }
    Ok(())
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging disabled: {e}");
    }

    let args = Cli::parse();
    let result = match args.command {
        CliCommand::Render(args) => render(args),
        CliCommand::Tables(args) => tables(args),
        CliCommand::Related(args) => related(args),
    };
    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
