use tracing::{error, info};

use crate::openai::{CompletionClient, CompletionRequest};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates company reports.";
pub const MAX_TOKENS: u32 = 1024;
pub const TEMPERATURE: f32 = 0.7;
pub const ERROR_PREFIX: &str = "OpenAI API Error:";
pub const LINE_BREAK: &str = "<br>";

pub fn build_prompt(company_name: &str, info: &str) -> String {
    format!(
        "Generate a comprehensive report about {company_name} using the information below.

Information:
{info}

The report should cover:
- Overview of the company
- Products and services
- Financial performance
- Recent news and developments
- Any other relevant publicly available information

Present the information in a clear and organized manner.
"
    )
}

/// Ask the completion service for a report on `company_name`.
///
/// Always returns displayable text: on failure the error is logged and its
/// description becomes the report, prefixed with `OpenAI API Error:`.
pub async fn generate_report(
    client: &impl CompletionClient,
    company_name: &str,
    info: &str,
) -> String {
    let request = CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        prompt: build_prompt(company_name, info),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    match client.complete(&request).await {
        Ok(text) => {
            let report = to_line_breaks(&text);
            info!(company = %company_name, chars = report.len(), "report generated");
            report
        }
        Err(e) => {
            let message = format!("{ERROR_PREFIX} {e}");
            error!(company = %company_name, "{message}");
            message
        }
    }
}

/// Trim the model output and turn every newline into `<br>`.
pub fn to_line_breaks(text: &str) -> String {
    text.trim().replace("\r\n", LINE_BREAK).replace(['\n', '\r'], LINE_BREAK)
}
