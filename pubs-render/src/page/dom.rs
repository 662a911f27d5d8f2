//! Small helpers over the `markup5ever_rcdom` tree
//!
//! The rcdom crate only ships the data structure; these cover the handful of operations the
//! publication list needs (build, query, mutate, serialize).

use crate::error::PageError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| attribute(name, value))
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create an element holding a single text node
pub fn create_element_with_text(tag: &str, attrs: Vec<(&str, &str)>, text: &str) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, create_text(text));
    element
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, ns!(), LocalName::from(name)),
        value: value.to_string().into(),
    }
}

/// Append `child` as the last child of `parent`
pub fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Drop all children of `parent` and append `children` instead
pub fn replace_children(parent: &Handle, children: Vec<Handle>) {
    parent.children.borrow_mut().clear();
    for child in children {
        append(parent, child);
    }
}

/// Tag name of an element node
pub fn tag_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

pub fn get_attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

pub fn has_attr(node: &Handle, name: &str) -> bool {
    get_attr(node, name).is_some()
}

/// Set an attribute, replacing an existing value. No-op on non-element nodes.
pub fn set_attr(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
            Some(attr) => attr.value = value.to_string().into(),
            None => attrs.push(attribute(name, value)),
        }
    }
}

pub fn remove_attr(node: &Handle, name: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|attr| &*attr.name.local != name);
    }
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    get_attr(node, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

/// All descendants of `root` in document order, excluding `root` itself
pub fn descendants(root: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.children.borrow().iter().rev().cloned());
        found.push(node);
    }
    found
}

/// First element in `root`'s subtree (root included) whose `id` matches
pub fn find_by_id(root: &Handle, id: &str) -> Option<Handle> {
    std::iter::once(root.clone())
        .chain(descendants(root))
        .find(|node| get_attr(node, "id").as_deref() == Some(id))
}

/// Concatenated text of every text node below `node`
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    for child in std::iter::once(node.clone()).chain(descendants(node)) {
        if let NodeData::Text { contents } = &child.data {
            text.push_str(&contents.borrow());
        }
    }
    text
}

/// Parse an HTML fragment into detached nodes ready to be appended elsewhere
pub fn parse_fragment(html: &str) -> Vec<Handle> {
    let dom = html5ever::parse_document(RcDom::default(), Default::default()).one(html);
    let body = descendants(&dom.document)
        .into_iter()
        .find(|node| tag_name(node).as_deref() == Some("body"));

    match body {
        Some(body) => {
            let children = std::mem::take(&mut *body.children.borrow_mut());
            for child in &children {
                child.parent.set(None);
            }
            children
        }
        None => Vec::new(),
    }
}

/// Serialize the children of `node` (the node's inner HTML)
pub fn inner_html(node: &Handle) -> Result<String, PageError> {
    let mut output = Vec::new();

    // IncludeNode serializes each child element together with its subtree
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in node.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())?;
    }

    Ok(String::from_utf8(output)?)
}

/// Serialize a node together with its subtree
pub fn outer_html(node: &Handle) -> Result<String, PageError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    serialize(&mut output, &SerializableHandle::from(node.clone()), opts)?;
    Ok(String::from_utf8(output)?)
}
