//! Shared fixtures: a scripted in-memory fetcher and a host page.

use async_trait::async_trait;
use pubs_render::{FetchError, Fetcher, HostPage, PublicationList, RenderSettings};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SOURCE: &str = "assets/data/publications.json";

/// Three year groups, deliberately out of order
pub const PUBLICATIONS_JSON: &str = r#"{
  "years": [
    { "year": 2020, "items": [
      { "title": "Old Paper", "authors": "A. Author", "venue": "Workshop 2020" },
      { "title": "Older Paper" }
    ] },
    { "year": 2023, "items": [
      { "title": "My Great Paper!! 2023", "authors": "A. Author, B. Author", "venue": "Conf 2023",
        "pdf": "papers/great.pdf", "code": "https://github.com/x/great" },
      { "title": "Explicit Notes", "md": "notes/explicit.md", "pdf": "papers/explicit.pdf" }
    ] },
    { "year": 2021, "items": [
      { "title": "Middle Paper", "code": "https://github.com/x/middle" },
      { "title": "Another Middle" }
    ] }
  ]
}"#;

pub const GREAT_DETAILS: &str = "assets/pubs/2023/my-great-paper-2023.md";
pub const MIDDLE_DETAILS: &str = "assets/pubs/2021/middle-paper.md";

/// Serves canned responses and records every request.
///
/// Each fetch yields to the runtime once before answering, so concurrent activations
/// observe the in-flight state.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Result<String, u16>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixture list plus a detail file for the 2023 paper
    pub fn with_fixture() -> Self {
        Self::new()
            .with_text(SOURCE, PUBLICATIONS_JSON)
            .with_text(
                GREAT_DETAILS,
                "## Abstract\n\nWe study **great** things.\n\n- fast\n- small",
            )
            .with_text("notes/explicit.md", "Explicit *notes*.")
    }

    pub fn with_text(mut self, path: &str, text: &str) -> Self {
        self.responses
            .insert(path.to_string(), Ok(text.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Err(status));
        self
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == path)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        tokio::task::yield_now().await;

        match self.responses.get(path) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                path: path.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}

/// A page with static fallback content and a root carrying `root_attrs`
pub fn host_page(root_attrs: &str) -> HostPage {
    HostPage::parse(&format!(
        r#"<!DOCTYPE html>
<html><head><title>Publications</title></head><body>
<section id="publications">
<div class="pub-year">2019</div>
<ol class="pub-list"><li>Static entry</li></ol>
<div id="pub-root" {root_attrs}></div>
</section>
</body></html>"#
    ))
}

pub async fn mount(
    root_attrs: &str,
    fetcher: &Arc<ScriptedFetcher>,
) -> PublicationList<Arc<ScriptedFetcher>> {
    PublicationList::mount(
        host_page(root_attrs),
        Arc::clone(fetcher),
        RenderSettings::default(),
    )
    .await
}

pub fn page_html<F>(list: &PublicationList<F>) -> String {
    list.page().to_html().unwrap()
}
