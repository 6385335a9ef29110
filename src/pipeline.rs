use tracing::{info, warn};

use crate::openai::CompletionClient;
use crate::report::generate_report;
use crate::search::{WebSearch, flatten_results};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyReport {
    pub company_name: String,
    pub report: String,
}

/// Search, flatten, then generate, strictly in that order.
///
/// Never fails: search problems degrade to an empty result set and
/// completion problems are carried inside the report text.
pub async fn build_company_report(
    search: &impl WebSearch,
    completion: &impl CompletionClient,
    company_name: &str,
) -> CompanyReport {
    info!(company = %company_name, "building company report");

    let items = search.search(company_name).await.unwrap_or_else(|e| {
        warn!(error = %e, "search failed, continuing without results");
        Vec::new()
    });
    let info = flatten_results(&items);
    let report = generate_report(completion, company_name, &info).await;

    CompanyReport {
        company_name: company_name.to_string(),
        report,
    }
}
