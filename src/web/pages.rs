use crate::html::{escape_html, escape_keeping_breaks};
use crate::pipeline::CompanyReport;

const STYLE: &str = "body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; line-height: 1.5; }";

pub fn index_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Company Report</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Company Report</h1>
<form action="/get_info" method="post">
<label for="company_name">Company name</label>
<input type="text" id="company_name" name="company_name" required>
<button type="submit">Generate report</button>
</form>
</body>
</html>
"#
    )
}

pub fn result_page(result: &CompanyReport) -> String {
    let company = escape_html(&result.company_name);
    let report = escape_keeping_breaks(&result.report);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Report: {company}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Report on {company}</h1>
<div class="report">{report}</div>
<p><a href="/">Look up another company</a></p>
</body>
</html>
"#
    )
}
