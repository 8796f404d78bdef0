//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Home page template: hero plus a featured selection of the catalog.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
}

/// Display the landing page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        products: state
            .catalog()
            .featured()
            .into_iter()
            .map(ProductView::from)
            .collect(),
    }
}
