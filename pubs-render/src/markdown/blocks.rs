//! Line scanner that groups inline-rendered text into block-level HTML.

use super::stash::Stash;
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(?:[-*]|\d+\.)[ \t]+(.+)$").unwrap());

const BLOCK_TAGS: [&str; 6] = ["<h", "<ul", "<pre", "<li", "<p", "<blockquote"];

/// Split the text into blocks and wrap whatever is not already block-level.
///
/// Headings, a code block alone on its line and runs of list lines always form their
/// own blocks; every other run of non-blank lines is a paragraph.
pub(super) fn assemble(text: &str, stash: &Stash) -> String {
    let mut assembler = Assembler::new(stash);
    for line in text.lines() {
        assembler.line(line);
    }
    assembler.finish()
}

struct Assembler<'a> {
    stash: &'a Stash,
    blocks: Vec<String>,
    paragraph: Vec<&'a str>,
    list: Vec<String>,
}

impl<'a> Assembler<'a> {
    fn new(stash: &'a Stash) -> Self {
        Self {
            stash,
            blocks: Vec::new(),
            paragraph: Vec::new(),
            list: Vec::new(),
        }
    }

    fn line(&mut self, line: &'a str) {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.flush();
            return;
        }

        if is_heading(trimmed) || self.stash.is_block(trimmed) {
            self.flush();
            self.blocks.push(trimmed.to_string());
            return;
        }

        if let Some(caps) = LIST_ITEM_RE.captures(line) {
            self.flush_paragraph();
            self.list.push(format!("<li>{}</li>", caps[1].trim_end()));
            return;
        }

        self.flush_list();
        self.paragraph.push(line);
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.paragraph);
        let first = lines[0].trim_start();

        if BLOCK_TAGS.iter().any(|tag| first.starts_with(tag)) || self.stash.starts_with_block(first)
        {
            self.blocks.push(lines.join("\n"));
            return;
        }

        let content = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("<br>");
        self.blocks.push(format!("<p>{content}</p>"));
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list);
        self.blocks.push(format!("<ul>\n{}\n</ul>", items.join("\n")));
    }

    fn finish(mut self) -> String {
        self.flush();
        self.blocks.join("\n")
    }
}

fn is_heading(line: &str) -> bool {
    ["<h1>", "<h2>", "<h3>"]
        .iter()
        .any(|tag| line.starts_with(tag))
}
