use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use super::pages;
use crate::pipeline::build_company_report;

#[derive(Debug, Deserialize)]
pub struct ReportForm {
    pub company_name: String,
}

pub async fn index() -> Html<String> {
    Html(pages::index_page())
}

pub async fn get_info(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Html<String> {
    info!(company = %form.company_name, "report requested");

    let result = build_company_report(&state.search, &state.completion, &form.company_name).await;

    Html(pages::result_page(&result))
}
