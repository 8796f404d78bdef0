//! Catalog route handlers: the filterable product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{ALL_CATEGORIES, Category};
use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Catalog filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub categoria: Option<String>,
}

/// One button in the filter bar; at most one is active.
#[derive(Clone)]
pub struct FilterView {
    pub token: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub filter_buttons: Vec<FilterView>,
    pub products: Vec<ProductView>,
}

/// Catalog grid fragment template (for HTMX filter swaps).
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog_grid.html")]
pub struct CatalogGridTemplate {
    pub products: Vec<ProductView>,
}

/// Build the filter bar for the selected token.
fn filter_buttons(selected: &str) -> Vec<FilterView> {
    let mut buttons = vec![FilterView {
        token: ALL_CATEGORIES,
        label: "Todas",
        active: selected == ALL_CATEGORIES,
    }];
    buttons.extend(Category::ALL.iter().map(|category| FilterView {
        token: category.token(),
        label: category.label(),
        active: selected == category.token(),
    }));
    buttons
}

/// Display the catalog page, optionally pre-filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogTemplate {
    let selected = query.categoria.unwrap_or_else(|| ALL_CATEGORIES.to_string());

    CatalogTemplate {
        filter_buttons: filter_buttons(&selected),
        products: state
            .catalog()
            .filtered(&selected)
            .into_iter()
            .map(ProductView::from)
            .collect(),
    }
}

/// Display the grid fragment for a filter selection (HTMX).
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> CatalogGridTemplate {
    let selected = query.categoria.unwrap_or_else(|| ALL_CATEGORIES.to_string());

    CatalogGridTemplate {
        products: state
            .catalog()
            .filtered(&selected)
            .into_iter()
            .map(ProductView::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_buttons_single_active() {
        let buttons = filter_buttons("suculentas");
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
        assert!(
            buttons
                .iter()
                .find(|b| b.token == "suculentas")
                .is_some_and(|b| b.active)
        );
    }

    #[test]
    fn test_filter_buttons_default_is_all() {
        let buttons = filter_buttons(ALL_CATEGORIES);
        assert!(buttons.first().is_some_and(|b| b.active));
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn test_filter_buttons_unknown_token_has_no_active() {
        let buttons = filter_buttons("carnivoras");
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 0);
    }
}
