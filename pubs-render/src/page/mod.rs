//! Host page the publication list is mounted into
//!
//! The page is a complete HTML5 document parsed with `html5ever` into a
//! `markup5ever_rcdom` tree. The component only ever touches the subtree of its root
//! container, plus the `style` of static placeholder content it hides.

pub mod dom;

use crate::error::PageError;
use html5ever::serialize::SerializeOpts;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom, SerializableHandle};

pub struct HostPage {
    dom: RcDom,
}

impl HostPage {
    /// Parse a full HTML document. Parsing is forgiving and never fails.
    pub fn parse(html: &str) -> Self {
        let dom = html5ever::parse_document(RcDom::default(), Default::default()).one(html);
        Self { dom }
    }

    /// Document node of the underlying tree
    pub fn document(&self) -> &Handle {
        &self.dom.document
    }

    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        dom::find_by_id(&self.dom.document, id)
    }

    /// Hide static fallback content without removing it.
    ///
    /// Every descendant of the element with id `scope_id` carrying one of `classes` gets
    /// `display: none` merged into its inline style. Returns how many elements were hidden.
    pub fn hide_placeholders(&self, scope_id: &str, classes: &[String]) -> usize {
        let Some(scope) = self.element_by_id(scope_id) else {
            return 0;
        };

        let mut hidden = 0;
        for node in dom::descendants(&scope) {
            if classes.iter().any(|class| dom::has_class(&node, class)) {
                let style = match dom::get_attr(&node, "style") {
                    Some(existing) if !existing.trim().is_empty() => {
                        format!("{}; display: none", existing.trim().trim_end_matches(';'))
                    }
                    _ => "display: none".to_string(),
                };
                dom::set_attr(&node, "style", &style);
                hidden += 1;
            }
        }
        hidden
    }

    /// Serialize the whole document back to HTML
    pub fn to_html(&self) -> Result<String, PageError> {
        let mut output = Vec::new();
        let document = SerializableHandle::from(self.dom.document.clone());
        html5ever::serialize(&mut output, &document, SerializeOpts::default())?;
        Ok(String::from_utf8(output)?)
    }
}
