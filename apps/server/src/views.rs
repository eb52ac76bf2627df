//! Server-rendered HTML pages.
//!
//! Pages are plain strings assembled with `format!`. Every user-supplied value
//! goes through [`escape`].

use axum::http::StatusCode;
use axum::response::Html;
use budgetbook_core::{
    budgets::Budget,
    constants::ISO_DATE_FORMAT,
    expenses::Expense,
    reports::{Dashboard, MonthlyReport},
    utils::time_utils::format_timestamp,
    Flash, SessionUser,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn nav(user: Option<&SessionUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<nav><span>Signed in as {}</span>
<a href="/dashboard">Dashboard</a> <a href="/add_expenses">Add expense</a>
<a href="/add_budget">Add budget</a> <a href="/update_budget">Update budget</a>
<a href="/monthly_report">Monthly report</a> <a href="/logout">Log out</a></nav>"#,
            escape(&user.username)
        ),
        None => r#"<nav><a href="/">Home</a> <a href="/register">Register</a> <a href="/login">Log in</a></nav>"#
            .to_string(),
    }
}

fn flash_banner(flash: Option<&Flash>) -> String {
    flash
        .map(|f| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                f.category.as_str(),
                escape(&f.message)
            )
        })
        .unwrap_or_default()
}

fn layout(
    title: &str,
    user: Option<&SessionUser>,
    flash: Option<&Flash>,
    body: &str,
) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} | Budgetbook</title></head>
<body>
{nav}
{flash}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        nav = nav(user),
        flash = flash_banner(flash),
        body = body,
    ))
}

fn expense_rows(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return r#"<tr><td colspan="3">No expenses recorded.</td></tr>"#.to_string();
    }
    expenses
        .iter()
        .map(|e| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&e.category),
                money(e.amount),
                e.date.format(ISO_DATE_FORMAT)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn expense_table(expenses: &[Expense]) -> String {
    format!(
        "<table>\n<thead><tr><th>Category</th><th>Amount</th><th>Date</th></tr></thead>\n<tbody>\n{}\n</tbody>\n</table>",
        expense_rows(expenses)
    )
}

pub fn landing(flash: Option<&Flash>) -> Html<String> {
    layout(
        "Welcome",
        None,
        flash,
        r#"<p>Track a monthly budget and every expense against it.</p>
<p><a href="/register">Create an account</a> or <a href="/login">log in</a>.</p>"#,
    )
}

pub fn register_form(flash: Option<&Flash>) -> Html<String> {
    layout(
        "Register",
        None,
        flash,
        r#"<form method="post" action="/register">
<label>Username <input name="username" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Sign up</button>
</form>"#,
    )
}

pub fn login_form(flash: Option<&Flash>) -> Html<String> {
    layout(
        "Log in",
        None,
        flash,
        r#"<form method="post" action="/login">
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>"#,
    )
}

pub fn dashboard(user: &SessionUser, view: &Dashboard, flash: Option<&Flash>) -> Html<String> {
    let budget_line = match &view.monthly_budget {
        Some(budget) => format!(
            "<p>Budget for {}: <strong>{}</strong></p>",
            escape(&budget.month),
            money(budget.amount)
        ),
        None => format!(
            r#"<p>No budget set for {}. <a href="/add_budget">Add one</a>.</p>"#,
            escape(&view.month)
        ),
    };
    let budgets = view
        .all_budgets
        .iter()
        .map(|b| format!("<li>{}: {}</li>", escape(&b.month), money(b.amount)))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"{budget_line}
<p>Total spent: <strong>{total}</strong></p>
<p>Remaining budget: <strong>{remaining}</strong></p>
<h2>Expenses</h2>
{table}
<h2>Budgets</h2>
<ul>
{budgets}
</ul>"#,
        total = money(view.lifetime_total),
        remaining = money(view.remaining_budget),
        table = expense_table(&view.expenses),
    );
    layout("Dashboard", Some(user), flash, &body)
}

pub fn add_budget_form(user: &SessionUser, month: &str, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="/add_budget">
<p>Month: {month}</p>
<label>Amount <input name="amount" type="number" step="0.01" min="0" required></label>
<button type="submit">Save budget</button>
</form>"#,
        month = escape(month)
    );
    layout("Add monthly budget", Some(user), flash, &body)
}

pub fn update_budget_form(user: &SessionUser, budget: &Budget, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="/update_budget">
<p>Month: {month}</p>
<label>Amount <input name="amount" type="number" step="0.01" min="0" value="{amount}" required></label>
<button type="submit">Update budget</button>
</form>"#,
        month = escape(&budget.month),
        amount = budget.amount
    );
    layout("Update monthly budget", Some(user), flash, &body)
}

pub fn add_expense_form(user: &SessionUser, today: NaiveDate, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"<form method="post" action="/add_expenses">
<label>Category <input name="category" required></label>
<label>Amount <input name="amount" type="number" step="0.01" min="0" required></label>
<label>Date <input name="date" type="date" value="{today}" required></label>
<button type="submit">Add expense</button>
</form>"#,
        today = today.format(ISO_DATE_FORMAT)
    );
    layout("Add expense", Some(user), flash, &body)
}

pub fn monthly_report(user: &SessionUser, report: &MonthlyReport, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"<p>{month} {year}</p>
{table}
<p>Total spent this month: <strong>{total}</strong></p>
<p>Budget: <strong>{budget}</strong></p>
<p>Remaining balance: <strong>{remaining}</strong></p>
<p>Generated at {generated}</p>
<p><a href="/download_report">Download CSV</a></p>"#,
        month = escape(&report.month),
        year = report.year,
        table = expense_table(&report.expenses),
        total = money(report.monthly_total),
        budget = money(report.total_budget),
        remaining = money(report.remaining_balance),
        generated = format_timestamp(report.generated_at),
    );
    layout("Monthly report", Some(user), flash, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    layout(
        status.canonical_reason().unwrap_or("Error"),
        None,
        None,
        &format!("<p>{}</p>", escape(message)),
    )
    .0
}
