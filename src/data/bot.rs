//! Bank of Taiwan historical rate page.
//!
//! The page publishes one fixed series (CNY quoted in TWD) no matter which
//! pair the query names.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::data::source::{RateTableSource, SourceError};
use crate::data::table::parse_rate_table;
use crate::debug::{DiagEvent, Diagnostics};
use crate::domain::RawRow;

pub const DEFAULT_SOURCE_URL: &str = "https://rate.bot.com.tw/xrt/quote/ltm/CNY";
pub const DEFAULT_USER_AGENT: &str = concat!("fx-trend/", env!("CARGO_PKG_VERSION"));

pub struct BotRatePage {
    client: Client,
    url: String,
    user_agent: String,
}

impl BotRatePage {
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn fetch_document(&self) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status(resp.status().as_u16()));
        }

        resp.text().map_err(|e| SourceError::Transport(e.to_string()))
    }
}

impl RateTableSource for BotRatePage {
    fn fetch_rows(&self, diag: &dyn Diagnostics) -> Result<Vec<RawRow>, SourceError> {
        diag.record(DiagEvent::Fetching { url: self.url.clone() });
        let html = self.fetch_document()?;
        parse_rate_table(&html, diag)
    }
}
