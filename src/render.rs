//! Markup rendering for the dashboard page.

use core::fmt::{self, Write as _};

use crate::dashboard::{Dashboard, Section};
use crate::error::Result;
use crate::money::MoneyFormatter;

/// What a single page request ends up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    /// The merged dashboard.
    Dashboard(&'a Dashboard),
    /// One of the clients has no white card.
    WhiteCardNotFound,
    /// A fetch failed; nothing partial is shown.
    FetchFailed,
}

/// Turns a [`Page`] into a response body.
pub trait Renderer: fmt::Debug + Send + Sync {
    /// Content type of the produced body.
    fn content_type(&self) -> &'static str;

    /// Renders `page`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DashboardError::Render`] if writing fails.
    fn render(&self, page: &Page<'_>) -> Result<String>;
}

/// Renders pages as a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    /// Formatter for every monetary value.
    money: MoneyFormatter,
}

impl HtmlRenderer {
    /// Creates a renderer showing amounts with `money`.
    #[inline]
    #[must_use]
    pub const fn new(money: MoneyFormatter) -> Self {
        Self { money }
    }

    /// Writes the dashboard body.
    fn write_dashboard(&self, out: &mut String, dashboard: &Dashboard) -> fmt::Result {
        writeln!(out, r#"<main class="main">"#)?;
        writeln!(
            out,
            "<h2>Current balance: {}</h2>",
            Escaped(&self.money.format(dashboard.balance))
        )?;
        writeln!(out, "<h2>Cashback</h2>")?;
        writeln!(
            out,
            "<p>Total cashback: {}</p>",
            Escaped(&self.money.format(dashboard.cashback_total))
        )?;
        self.write_section(out, "Debit", &dashboard.debit)?;
        self.write_section(out, "Credit", &dashboard.credit)?;
        writeln!(out, "</main>")
    }

    /// Writes a section heading followed by one block per entry.
    fn write_section(&self, out: &mut String, label: &str, section: &Section) -> fmt::Result {
        writeln!(
            out,
            "<h2>{label}. Total: {}</h2>",
            Escaped(&self.money.format(section.total))
        )?;
        for tx in &section.entries {
            writeln!(
                out,
                r#"<div class="transaction" data-id="{}">"#,
                Escaped(tx.id.as_inner())
            )?;
            writeln!(out, "<h3>Provider: {}</h3>", Escaped(&tx.description))?;
            writeln!(
                out,
                "<p>Amount: {}</p>",
                Escaped(&self.money.format(tx.amount))
            )?;
            writeln!(
                out,
                "<p>Balance: {}</p>",
                Escaped(&self.money.format(tx.balance))
            )?;
            writeln!(out, "</div>")?;
        }
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    #[inline]
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }

    #[inline]
    fn render(&self, page: &Page<'_>) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html lang="en">"#)?;
        writeln!(
            out,
            r#"<head><meta charset="utf-8"><title>Balance</title></head>"#
        )?;
        writeln!(out, "<body>")?;
        match *page {
            Page::Dashboard(dashboard) => self.write_dashboard(&mut out, dashboard)?,
            Page::WhiteCardNotFound => writeln!(out, "<div>White card not found.</div>")?,
            Page::FetchFailed => writeln!(out, "<main>Can&#39;t fetch bank history.</main>")?,
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

/// Displays text with HTML special characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}
