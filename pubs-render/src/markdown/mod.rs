//! Markdown to HTML conversion for publication detail files
//!
//!     Detail files are short, hand written notes (abstract, bibtex, a few links). They are
//!     rendered with a deliberately small dialect instead of a full CommonMark engine: every
//!     construct below maps to exactly one substitution stage, and anything that does not
//!     match passes through as literal text. Rendering never fails.
//!
//! Stages
//!
//!     Order matters, each stage sees the output of the previous one:
//!
//!     | Stage          | Source                        | Output                                  |
//!     |----------------|-------------------------------|-----------------------------------------|
//!     | escape         | `&`, `<`, `>`                 | `&amp;`, `&lt;`, `&gt;`                 |
//!     | code fence     | ```` ```code``` ````          | `<pre><code>code</code></pre>`          |
//!     | inline code    | `` `code` ``                  | `<code>code</code>`                     |
//!     | bold           | `**text**`                    | `<strong>text</strong>`                 |
//!     | italic         | `*text*`                      | `<em>text</em>`                         |
//!     | headings       | `### `, `## `, `# `           | `<h3>`, `<h2>`, `<h1>`                  |
//!     | links          | `[label](url)`                | `<a href target="_blank" rel="noopener">` |
//!     | lists          | `- x`, `* x`, `1. x`          | `<li>` runs wrapped in one `<ul>`       |
//!     | paragraphs     | blank line separated blocks   | `<p>` with `<br>` for inner line breaks |
//!
//!     Code (fenced and inline) is stashed behind a placeholder as soon as it is recognized and
//!     restored last, so its content is never touched by later stages.
//!
//!     Ordered and unordered list lines share the same `<ul>` wrapper.

mod blocks;
mod stash;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use stash::Stash;

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
// Markers must hug their content and stay on one line, so `* item` bullets survive.
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\s](?:[^*\n]*[^*\s])?)\*\*").unwrap());
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^###[ \t]+(.+)$").unwrap());
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##[ \t]+(.+)$").unwrap());
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render a markdown blob to an HTML fragment.
///
/// Empty or whitespace-only input yields an empty string.
pub fn render(markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return String::new();
    }

    let mut stash = Stash::default();
    let text = escape_html(&normalize(markdown));

    let text = CODE_FENCE_RE.replace_all(&text, |caps: &Captures| {
        stash.block(format!("<pre><code>{}</code></pre>", &caps[1]))
    });
    let text = INLINE_CODE_RE.replace_all(&text, |caps: &Captures| {
        stash.inline(format!("<code>{}</code>", &caps[1]))
    });

    let text = BOLD_RE.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");

    let text = H3_RE.replace_all(&text, "<h3>$1</h3>");
    let text = H2_RE.replace_all(&text, "<h2>$1</h2>");
    let text = H1_RE.replace_all(&text, "<h1>$1</h1>");

    let text = LINK_RE.replace_all(&text, |caps: &Captures| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            caps[2].replace('"', "&quot;"),
            &caps[1]
        )
    });

    let html = blocks::assemble(&text, &stash);
    stash.restore(&html)
}

/// Unify line endings and clear the placeholder delimiter out of user text.
fn normalize(markdown: &str) -> String {
    markdown.replace("\r\n", "\n").replace('\0', "\u{FFFD}")
}

/// Escape `&` first so entities produced for `<` and `>` are not escaped twice.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
