//! Server-rendered search page
//!
//! `GET /` shows the empty form. The form posts back to `/`, which runs one
//! search through the same [`HotelSearch`] the relay endpoint uses and renders
//! the resulting state.

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::Datelike;
use serde::Deserialize;
use tracing::instrument;

use crate::models::{Route, decode_routes};
use crate::upstream::HotelSearch;
use crate::{Result, web::AppState};

pub mod render;
pub mod state;

pub use render::render_page;
pub use state::{Phase, SearchView, Ticket};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub prompt: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index).post(submit_search))
}

/// Run one search and decode the answer into result groups
pub async fn search_routes(search: &dyn HotelSearch, prompt: &str) -> Result<Vec<Route>> {
    let raw = search.search(prompt).await?;
    decode_routes(&raw)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

async fn index() -> Html<String> {
    Html(render_page(&SearchView::new(), current_year()))
}

#[instrument(skip_all)]
async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> (StatusCode, Html<String>) {
    let mut view = SearchView::new();
    view.set_prompt(form.prompt);

    let ticket = view.submit();
    let outcome = search_routes(state.search.as_ref(), ticket.prompt()).await;
    let status = match &outcome {
        Ok(routes) => {
            tracing::info!(routes = routes.len(), "Search finished");
            StatusCode::OK
        }
        Err(err) => {
            tracing::warn!(error = %err, "Search failed");
            err.status_code()
        }
    };
    view.resolve(ticket, outcome);

    (status, Html(render_page(&view, current_year())))
}
