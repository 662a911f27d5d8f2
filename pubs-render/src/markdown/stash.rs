//! Placeholder storage for content that later stages must not touch.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x00(\d+)\x00").unwrap());

#[derive(Debug, Default)]
pub(super) struct Stash {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    html: String,
    block: bool,
}

impl Stash {
    /// Store block-level HTML (a code block) and return its placeholder
    pub(super) fn block(&mut self, html: String) -> String {
        self.push(html, true)
    }

    /// Store inline HTML (a code span) and return its placeholder
    pub(super) fn inline(&mut self, html: String) -> String {
        self.push(html, false)
    }

    fn push(&mut self, html: String, block: bool) -> String {
        let index = self.entries.len();
        self.entries.push(Entry { html, block });
        format!("\0{index}\0")
    }

    /// True when `text` is exactly one block placeholder
    pub(super) fn is_block(&self, text: &str) -> bool {
        PLACEHOLDER_RE
            .captures(text)
            .filter(|caps| caps[0].len() == text.len())
            .is_some_and(|caps| self.entry_is_block(&caps))
    }

    /// True when `text` opens with a block placeholder
    pub(super) fn starts_with_block(&self, text: &str) -> bool {
        PLACEHOLDER_RE
            .captures(text)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0))
            .is_some_and(|caps| self.entry_is_block(&caps))
    }

    fn entry_is_block(&self, caps: &Captures) -> bool {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| self.entries.get(index))
            .is_some_and(|entry| entry.block)
    }

    /// Swap every placeholder back for its HTML.
    ///
    /// Placeholders can nest (a code span matched around a stashed fence), so this runs
    /// until nothing is left, bounded by the number of entries.
    pub(super) fn restore(&self, text: &str) -> String {
        let mut output = text.to_string();
        for _ in 0..=self.entries.len() {
            if !PLACEHOLDER_RE.is_match(&output) {
                break;
            }
            output = PLACEHOLDER_RE
                .replace_all(&output, |caps: &Captures| {
                    caps[1]
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| self.entries.get(index))
                        .map(|entry| entry.html.clone())
                        .unwrap_or_default()
                })
                .into_owned();
        }
        output
    }
}
