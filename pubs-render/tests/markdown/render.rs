//! Rendering tests for the detail-file markdown dialect

use insta::assert_snapshot;
use pubs_render::markdown::render;

// ============================================================================
// INLINE ELEMENTS
// ============================================================================

#[test]
fn test_empty() {
    assert_eq!(render(""), "");
}

#[test]
fn test_bold() {
    assert!(render("**a**").contains("<strong>a</strong>"));
    assert!(!render("**a**").contains("<em>"));
}

#[test]
fn test_italic() {
    let html = render("*a*");
    assert!(html.contains("<em>a</em>"));
    assert!(!html.contains("<strong>"));
}

#[test]
fn test_bold_and_italic_mixed() {
    assert_eq!(
        render("**strong** then *soft* then **more**"),
        "<p><strong>strong</strong> then <em>soft</em> then <strong>more</strong></p>"
    );
}

#[test]
fn test_inline_code_untouched() {
    assert_eq!(
        render("run `cargo **build**` now"),
        "<p>run <code>cargo **build**</code> now</p>"
    );
}

#[test]
fn test_link_opens_safely() {
    let html = render("[x](http://y)");
    assert!(html.contains(r#"<a href="http://y" target="_blank" rel="noopener">x</a>"#));
}

// ============================================================================
// ESCAPING
// ============================================================================

#[test]
fn test_escaping_precedes_tags() {
    let html = render("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_ampersand_not_double_escaped() {
    assert_eq!(render("a & <b>"), "<p>a &amp; &lt;b&gt;</p>");
}

// ============================================================================
// BLOCK ELEMENTS
// ============================================================================

#[test]
fn test_heading_one() {
    let html = render("# T");
    assert_eq!(html, "<h1>T</h1>");
}

#[test]
fn test_code_fence_verbatim() {
    assert_eq!(
        render("```\n**not bold** <tag>\n\n# not heading\n```"),
        "<pre><code>\n**not bold** &lt;tag&gt;\n\n# not heading\n</code></pre>"
    );
}

#[test]
fn test_ordered_and_unordered_share_wrapper() {
    assert_eq!(
        render("1. first\n2. second\n- third"),
        "<ul>\n<li>first</li>\n<li>second</li>\n<li>third</li>\n</ul>"
    );
}

#[test]
fn test_indented_list_items() {
    assert_eq!(
        render("  - nested\n- top"),
        "<ul>\n<li>nested</li>\n<li>top</li>\n</ul>"
    );
}

#[test]
fn test_paragraph_line_breaks() {
    assert_eq!(
        render("line one\nline two\n\nnext block"),
        "<p>line one<br>line two</p>\n<p>next block</p>"
    );
}

#[test]
fn test_crlf_input() {
    assert_eq!(render("# T\r\n\r\nbody"), "<h1>T</h1>\n<p>body</p>");
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn test_unterminated_fence_is_literal() {
    assert_eq!(render("```oops"), "<p>```oops</p>");
}

#[test]
fn test_unmatched_markers_are_literal() {
    assert_eq!(render("**open"), "<p>**open</p>");
    assert_eq!(render("half*"), "<p>half*</p>");
    assert_eq!(render("[label](no-close"), "<p>[label](no-close</p>");
}

// ============================================================================
// DOCUMENTS
// ============================================================================

#[test]
fn test_detail_document() {
    let source = "# Title\n\nSome *intro* text\nwith a second line.\n\n- one\n- **two**\n1. three\n\n```\nfn main() {}\n```\n";
    assert_snapshot!(render(source), @r"
    <h1>Title</h1>
    <p>Some <em>intro</em> text<br>with a second line.</p>
    <ul>
    <li>one</li>
    <li><strong>two</strong></li>
    <li>three</li>
    </ul>
    <pre><code>
    fn main() {}
    </code></pre>
    ");
}

#[test]
fn test_links_inside_list() {
    let source = "Resources:\n- [Slides](https://example.org/s.pdf)\n- [Video](https://example.org/v)";
    assert_eq!(
        render(source),
        "<p>Resources:</p>\n<ul>\n\
         <li><a href=\"https://example.org/s.pdf\" target=\"_blank\" rel=\"noopener\">Slides</a></li>\n\
         <li><a href=\"https://example.org/v\" target=\"_blank\" rel=\"noopener\">Video</a></li>\n\
         </ul>"
    );
}
