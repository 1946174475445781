//! `storefront` — query the product catalog from the command line.
//!
//! The catalog is loaded once, then handed by reference to the command
//! handlers. Results are printed to stdout as JSON.

pub mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use storefront_products::{Catalog, CategoryId, ProductId};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Storefront product catalog queries",
    after_help = "Examples:\n  storefront categories\n  storefront category 2\n  storefront product 3\n  storefront search juice --pretty"
)]
pub struct Cli {
    /// JSON product file to use instead of the built-in catalog.
    #[arg(long, env = "STOREFRONT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Indent JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(about = "List category ids in order of first appearance, with product counts")]
    Categories,
    #[command(about = "List every product in a category, in catalog order")]
    Category {
        #[arg(allow_negative_numbers = true)]
        id: CategoryId,
    },
    #[command(about = "Show a single product")]
    Product {
        #[arg(allow_negative_numbers = true)]
        id: ProductId,
    },
    #[command(about = "Rank products by how often the query occurs in name and description")]
    Search {
        query: String,
        #[arg(long, help = "Lower-case the query before matching")]
        fold_query: bool,
    },
}

/// Load the catalog from `path`, or the built-in table when `None`.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog file {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("invalid catalog file {}", path.display()))?
        }
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };
    tracing::info!(products = catalog.len(), "catalog ready");
    Ok(catalog)
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => commands::execute(&catalog, &cli.command),
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "catalog load failed");
            commands::CommandResult::failure("catalog_load", format!("{error:#}"), 1)
        }
    };

    println!("{}", result.render(cli.pretty));
    ExitCode::from(result.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_empty_query() {
        let cli = Cli::try_parse_from(["storefront", "search", "", "--fold-query"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Search { query: String::new(), fold_query: true }
        );
    }

    #[test]
    fn parses_negative_ids_and_global_flags() {
        let cli = Cli::try_parse_from(["storefront", "--pretty", "product", "-5"]).unwrap();
        assert_eq!(cli.command, Command::Product { id: ProductId::new(-5) });
        assert!(cli.pretty);
    }

    #[test]
    fn parses_categories_subcommand() {
        let cli = Cli::try_parse_from(["storefront", "categories"]).unwrap();
        assert_eq!(cli.command, Command::Categories);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = Cli::try_parse_from(["storefront", "category", "fruit"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid identifier: CategoryId:"));
    }

    #[test]
    fn load_catalog_defaults_to_builtin() {
        assert_eq!(load_catalog(None).unwrap().len(), 8);
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read catalog file"));
    }
}
