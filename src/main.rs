use clap::{Parser as ClapParser, Subcommand};
use nutmeg::cli::{self, CliError, FindOptions, FindResult};
use nutmeg::output::{to_json, to_json_pretty};
use nutmeg::{Document, Evaluator, Lexer, Parser, Value};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "nutmeg")]
#[command(about = "Nutmeg - A MongoDB-style find-query language for JSON document collections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and execute a find query
    Find {
        /// The query to execute, e.g. 'db.users.find({"age": {"$gt": 25}})'
        query: String,

        /// JSON array of documents (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate the query, don't execute
        #[arg(long)]
        parse_only: bool,
    },

    /// Run a query against the bundled sample collection
    Demo {
        /// The query to run (defaults to an age/city example)
        query: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Find {
            query,
            input,
            pretty,
            parse_only,
        } => run_find(query, input, pretty, parse_only),
        Commands::Demo { query } => run_demo(query),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_find(
    query: String,
    input: Option<String>,
    pretty: bool,
    parse_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = FindOptions {
        query,
        input,
        parse_only,
    };

    match cli::execute_find(&options)? {
        FindResult::SyntaxValid => println!("Syntax is valid"),
        FindResult::Matched(documents) => {
            let output = Value::Array(
                documents
                    .into_iter()
                    .map(Document::into_value)
                    .collect(),
            );
            let json = if pretty {
                to_json_pretty(&output)
            } else {
                to_json(&output)
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_demo(query: Option<String>) -> Result<(), CliError> {
    let query = query.unwrap_or_else(|| {
        r#"db.people.find({"age": {"$gt": 25}, "city": "New York"})"#.to_string()
    });

    let tokens = Lexer::tokenize(&query).map_err(CliError::Lex)?;
    let mut parser = Parser::new(tokens);
    let parsed = parser.parse().map_err(CliError::Parse)?;

    let documents = cli::sample_documents();
    let evaluator = Evaluator::new();
    let results = evaluator
        .evaluate(&parsed, &documents)
        .map_err(CliError::Eval)?;

    println!("Query Results:");
    for document in results {
        println!("{}", to_json_pretty(&document.into_value()));
    }
    Ok(())
}
