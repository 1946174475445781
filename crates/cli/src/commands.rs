//! Command handlers. Each takes the shared catalog by reference and produces a
//! JSON payload plus an exit code.

use serde_json::{Value, json};

use storefront_core::{CategoryId, ProductId};
use storefront_products::{Catalog, QueryCase};

use crate::Command;

/// Exit code for a lookup miss.
pub const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: Value,
}

impl CommandResult {
    pub fn success(output: Value) -> Self {
        Self { exit_code: 0, output }
    }

    pub fn failure(error_class: &str, message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            exit_code,
            output: json!({
                "status": "error",
                "error_class": error_class,
                "message": message.into(),
            }),
        }
    }

    pub fn render(&self, pretty: bool) -> String {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.output)
        } else {
            serde_json::to_string(&self.output)
        };
        rendered.unwrap_or_default()
    }
}

pub fn execute(catalog: &Catalog, command: &Command) -> CommandResult {
    match command {
        Command::Categories => categories(catalog),
        Command::Category { id } => category(catalog, *id),
        Command::Product { id } => product(catalog, *id),
        Command::Search { query, fold_query } => {
            let case = if *fold_query { QueryCase::Folded } else { QueryCase::AsGiven };
            search(catalog, query, case)
        }
    }
}

fn categories(catalog: &Catalog) -> CommandResult {
    let items: Vec<_> = catalog
        .categories()
        .into_iter()
        .map(|id| json!({ "categoryId": id, "products": catalog.list_by_category(id).len() }))
        .collect();
    CommandResult::success(json!({ "items": items }))
}

fn category(catalog: &Catalog, category_id: CategoryId) -> CommandResult {
    let items = catalog.list_by_category(category_id);
    CommandResult::success(json!({
        "categoryId": category_id,
        "items": items,
    }))
}

fn product(catalog: &Catalog, product_id: ProductId) -> CommandResult {
    match catalog.get_by_id(product_id) {
        Ok(product) => CommandResult::success(json!(product)),
        Err(error) => {
            tracing::warn!(%product_id, "product not found");
            CommandResult::failure("not_found", error.to_string(), EXIT_NOT_FOUND)
        }
    }
}

fn search(catalog: &Catalog, query: &str, case: QueryCase) -> CommandResult {
    let hits = catalog.search_scored(query, case);
    CommandResult::success(json!({
        "query": query,
        "items": hits,
    }))
}
