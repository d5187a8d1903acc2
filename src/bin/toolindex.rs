//! Query CLI over a tools index.
//!
//! Usage:
//!   toolindex list --category networking --sort name --order desc --limit 10
//!   toolindex search --query grep --limit 5
//!   toolindex show ripgrep
//!   toolindex stats
//!   toolindex categories
//!   toolindex bulk wget curl missing
//!   toolindex random --difficulty beginner
//!   toolindex install jq
//!
//! Every command prints a JSON document to stdout. Engine failures are
//! translated into the error envelope (with its status signal) on stderr.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use toolindex::boundary::{
    BulkResponse, CategoriesResponse, ErrorResponse, HealthResponse, InstallResponse, ListParams,
    ListResponse, RandomResponse, SearchResponse, StatsResponse, ToolWithRelated, search_limit,
};
use toolindex::error::QueryError;
use toolindex::{CatalogStore, FilterCriteria, engine, load_index_from_path, resolve_index_path};

#[derive(Parser, Debug)]
#[command(name = "toolindex")]
#[command(about = "Query a CLI tools index: filter, search, stats, lookup")]
struct Cli {
    /// Path to the tools index; defaults to $TOOLINDEX_DATA, then data/tools-index.json.
    #[arg(long, global = true)]
    index: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tools with optional filters, sorting, and pagination.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Sort field (any string-valued attribute, default name).
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc.
        #[arg(long)]
        order: Option<String>,
        #[arg(long)]
        offset: Option<String>,
        #[arg(long)]
        limit: Option<String>,
    },
    /// Rank tools matching a free-text query.
    Search {
        #[arg(short, long)]
        query: String,
        #[arg(long)]
        limit: Option<String>,
    },
    /// Show one tool with up to three related entries.
    Show { name: String },
    /// Aggregate statistics over the whole index.
    Stats,
    /// Category keys with display names and per-category counts.
    Categories,
    /// Look up several tools at once; result order follows the request.
    Bulk { names: Vec<String> },
    /// Random recommendation from an optional category/difficulty subset.
    Random {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Print the install command for a tool.
    Install { name: String },
    /// Report whether the index loaded and when.
    Health,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let index_path = resolve_index_path(cli.index);
    let store = CatalogStore::new();
    let snapshot = load_index_from_path(&index_path)?;
    store.set(snapshot);

    match dispatch(&cli.command, &store) {
        Ok(body) => {
            println!("{body}");
            Ok(())
        }
        Err(err) => match err.downcast_ref::<QueryError>() {
            Some(engine_err) => {
                let envelope = ErrorResponse::from_error(engine_err);
                eprintln!("{}", serde_json::to_string_pretty(&envelope)?);
                std::process::exit(1);
            }
            None => Err(err),
        },
    }
}

fn dispatch(command: &Command, store: &CatalogStore) -> Result<String> {
    if matches!(command, Command::Health) {
        return render(&HealthResponse::new(store.health()));
    }

    let snapshot = store.get()?;
    match command {
        Command::List {
            category,
            difficulty,
            tag,
            sort,
            order,
            offset,
            limit,
        } => {
            let query = ListParams {
                category: category.clone(),
                difficulty: difficulty.clone(),
                tag: tag.clone(),
                sort: sort.clone(),
                order: order.clone(),
                offset: offset.clone(),
                limit: limit.clone(),
            }
            .resolve();
            let filtered = engine::filter(&snapshot.tools, &query.criteria);
            let sorted = engine::sort_tools(filtered, &query.sort_field, query.order);
            let page = engine::paginate(sorted, query.offset, query.limit);
            render(&ListResponse::new(
                page,
                &query.criteria,
                query.offset,
                query.limit,
            ))
        }
        Command::Search { query, limit } => {
            let hits = engine::search(&snapshot.tools, query)?;
            let limit = search_limit(limit.as_deref());
            render(&SearchResponse::new(query, hits, limit))
        }
        Command::Show { name } => {
            let tool = engine::find_by_name(&snapshot.tools, name)?;
            let related = engine::related(tool, &snapshot.tools);
            render(&ToolWithRelated { tool, related })
        }
        Command::Stats => {
            let stats = engine::aggregate(&snapshot);
            let last_update = store.health().last_update;
            render(&StatsResponse::new(stats, &snapshot, last_update))
        }
        Command::Categories => {
            render(&CategoriesResponse::new(engine::categories_with_counts(
                &snapshot,
            )))
        }
        Command::Bulk { names } => {
            let payload = serde_json::json!(names);
            let entries = engine::bulk_lookup(&snapshot.tools, &payload)?;
            render(&BulkResponse::new(entries))
        }
        Command::Random {
            category,
            difficulty,
        } => {
            let criteria = FilterCriteria {
                category: category.clone(),
                difficulty: difficulty.clone(),
                tag: None,
            };
            let mut rng = rand::rng();
            let Some(tool) = engine::random_pick(&snapshot.tools, &criteria, &mut rng) else {
                bail!("no tools match the specified criteria");
            };
            render(&RandomResponse {
                tool,
                criteria: &criteria,
            })
        }
        Command::Install { name } => {
            let tool = engine::find_by_name(&snapshot.tools, name)?;
            render(&InstallResponse::new(tool))
        }
        Command::Health => render(&HealthResponse::new(store.health())),
    }
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing response")
}
