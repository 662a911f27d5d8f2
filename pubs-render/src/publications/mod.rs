//! Publication list component
//!
//!     [`PublicationList::mount`] is the page-ready entry point: it reads the root container's
//!     configuration, fetches the publication set, and renders it either grouped by year or as
//!     one flattened list. [`PublicationList::toggle`] is the "Details" control: the first
//!     activation of an item fetches and renders its markdown file, every activation flips the
//!     panel's visibility.
//!
//! Markup
//!
//!     <div class="pub-year">2024</div>            (grouped mode only)
//!     <ol class="pub-list">
//!       <li><div class="pub">
//!         <span class="title">…</span>
//!         <span class="links"> [<a>PDF</a>] [<a>Code</a>]</span>
//!         <div class="pub-controls"><button class="pub-details-toggle" data-pub-id="0">Details</button></div>
//!         <div class="authors">…</div>
//!         <div class="venue">…</div>
//!         <div class="pub-details" hidden><div class="pub-details-body"></div></div>
//!       </div></li>
//!     </ol>
//!
//! Failure domains
//!
//!     A list failure (fetch, status, JSON) replaces the whole list with one notice. A detail
//!     failure only affects that item's panel. Neither surfaces as an error to the caller.

mod details;
mod host;
mod layout;
mod settings;

pub use details::{DetailState, ItemId, ToggleOutcome};
pub use host::HostConfig;
pub use layout::{layout, Section};
pub use settings::{Labels, RenderSettings};

use crate::error::{LoadError, PageError};
use crate::fetch::Fetcher;
use crate::markdown;
use crate::model::{Publication, PublicationSet, Year};
use crate::page::{dom, HostPage};
use details::{Activation, DetailStates};
use markup5ever_rcdom::Handle;
use tracing::{debug, error, info, warn};

/// Outcome of mounting the component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// The page has no root container; nothing was touched
    Missing,
    /// The publication set could not be loaded; an error notice was rendered
    Failed,
    Rendered { count: usize },
}

/// One item as rendered into the page
#[derive(Debug)]
pub struct RenderedItem {
    id: ItemId,
    year: Year,
    publication: Publication,
    detail_path: String,
    toggle: Handle,
    details: Handle,
    body: Handle,
}

impl RenderedItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    pub fn title(&self) -> &str {
        &self.publication.title
    }

    /// Resolved location of the markdown detail file
    pub fn detail_path(&self) -> &str {
        &self.detail_path
    }

    /// Current text of the toggle control
    pub fn toggle_label(&self) -> String {
        dom::text_content(&self.toggle)
    }

    pub fn is_expanded(&self) -> bool {
        !dom::has_attr(&self.details, "hidden")
    }

    /// Current inner HTML of the details panel
    pub fn details_html(&self) -> Result<String, PageError> {
        dom::inner_html(&self.body)
    }
}

pub struct PublicationList<F> {
    page: HostPage,
    fetcher: F,
    settings: RenderSettings,
    status: ListStatus,
    items: Vec<RenderedItem>,
    details: DetailStates,
}

impl<F: Fetcher> PublicationList<F> {
    /// Render the publication list into `page`.
    ///
    /// Never fails: problems end up as [`ListStatus::Missing`] or [`ListStatus::Failed`]
    /// and, for the latter, a visible notice in the root container.
    pub async fn mount(page: HostPage, fetcher: F, settings: RenderSettings) -> Self {
        let mut list = Self {
            page,
            fetcher,
            settings,
            status: ListStatus::Missing,
            items: Vec::new(),
            details: DetailStates::default(),
        };

        let Some(root) = list.page.element_by_id(&list.settings.root_id) else {
            warn!(root_id = %list.settings.root_id, "publication root not found");
            return list;
        };
        let host = HostConfig::from_root(&root, &list.settings);

        match list.load(&host.source).await {
            Ok(set) => {
                list.page.hide_placeholders(
                    &list.settings.placeholder_scope,
                    &list.settings.placeholder_classes,
                );
                list.render(&root, &set, &host);
                let count = list.items.len();
                info!(source = %host.source, count, flat = host.flat, "rendered publications");
                list.status = ListStatus::Rendered { count };
            }
            Err(err) => {
                error!(source = %host.source, error = %err, "failed to load publications");
                dom::append(
                    &root,
                    dom::create_element_with_text(
                        "div",
                        vec![("class", "callout")],
                        &list.settings.labels.list_failed,
                    ),
                );
                list.status = ListStatus::Failed;
            }
        }

        list
    }

    async fn load(&self, source: &str) -> Result<PublicationSet, LoadError> {
        debug!(source, "fetching publication list");
        let text = self.fetcher.fetch_text(source).await?;
        Ok(PublicationSet::from_json(&text)?)
    }

    /// Activate the "Details" control of an item.
    ///
    /// The first activation shows the panel with a loading placeholder and fetches the
    /// detail file; later activations only flip visibility. Activating while the fetch is
    /// still in flight does nothing. Returns `None` for an unknown item.
    pub async fn toggle(&self, id: ItemId) -> Option<ToggleOutcome> {
        let item = self.items.get(id.0)?;

        let activation = self.details.activate(id);
        if activation == Activation::Busy {
            debug!(item = %id, "details still loading, ignoring activation");
            return Some(ToggleOutcome::Pending);
        }

        if activation == Activation::Load {
            self.show_message(item, "pub-loading", &self.settings.labels.loading);
        }
        let outcome = self.flip(item);

        if activation == Activation::Load {
            self.load_details(item).await;
        }
        Some(outcome)
    }

    async fn load_details(&self, item: &RenderedItem) {
        debug!(item = %item.id, path = %item.detail_path, "fetching details");

        let state = match self.fetcher.fetch_text(&item.detail_path).await {
            Ok(text) => {
                let html = markdown::render(&text);
                dom::replace_children(&item.body, dom::parse_fragment(&html));
                DetailState::Loaded(html)
            }
            Err(err) => {
                warn!(item = %item.id, path = %item.detail_path, error = %err, "details not available");
                self.show_message(item, "pub-error", &self.settings.labels.detail_unavailable);
                DetailState::Failed
            }
        };

        self.details.settle(item.id, state);
    }

    fn show_message(&self, item: &RenderedItem, class: &str, text: &str) {
        let message = dom::create_element_with_text("div", vec![("class", class)], text);
        dom::replace_children(&item.body, vec![message]);
    }

    fn flip(&self, item: &RenderedItem) -> ToggleOutcome {
        let labels = &self.settings.labels;
        if dom::has_attr(&item.details, "hidden") {
            dom::remove_attr(&item.details, "hidden");
            dom::replace_children(&item.toggle, vec![dom::create_text(&labels.hide)]);
            ToggleOutcome::Shown
        } else {
            dom::set_attr(&item.details, "hidden", "");
            dom::replace_children(&item.toggle, vec![dom::create_text(&labels.show)]);
            ToggleOutcome::Hidden
        }
    }
}

impl<F> PublicationList<F> {
    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn page(&self) -> &HostPage {
        &self.page
    }

    pub fn into_page(self) -> HostPage {
        self.page
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Rendered items in display order
    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&RenderedItem> {
        self.items.get(id.0)
    }

    pub fn detail_state(&self, id: ItemId) -> Option<DetailState> {
        self.item(id).map(|item| self.details.get(item.id))
    }

    fn render(&mut self, root: &Handle, set: &PublicationSet, host: &HostConfig) {
        let sections = layout(set, host.limit);

        if host.flat {
            let list = dom::create_element("ol", vec![("class", "pub-list")]);
            for section in &sections {
                for publication in &section.items {
                    let entry = self.render_item(section.year, publication);
                    dom::append(&list, entry);
                }
            }
            dom::append(root, list);
            return;
        }

        for section in &sections {
            dom::append(
                root,
                dom::create_element_with_text(
                    "div",
                    vec![("class", "pub-year")],
                    section.year.label(),
                ),
            );
            let list = dom::create_element("ol", vec![("class", "pub-list")]);
            for publication in &section.items {
                let entry = self.render_item(section.year, publication);
                dom::append(&list, entry);
            }
            dom::append(root, list);
        }
    }

    fn render_item(&mut self, year: &Year, publication: &Publication) -> Handle {
        let id = ItemId(self.items.len());
        let id_attr = id.to_string();
        let labels = &self.settings.labels;

        let entry = dom::create_element("li", vec![]);
        let container = dom::create_element("div", vec![("class", "pub")]);

        dom::append(
            &container,
            dom::create_element_with_text("span", vec![("class", "title")], &publication.title),
        );
        if let Some(links) = links(publication) {
            dom::append(&container, links);
        }

        let toggle = dom::create_element_with_text(
            "button",
            vec![
                ("class", "pub-details-toggle"),
                ("type", "button"),
                ("data-pub-id", id_attr.as_str()),
            ],
            &labels.show,
        );
        let controls = dom::create_element("div", vec![("class", "pub-controls")]);
        dom::append(&controls, toggle.clone());
        dom::append(&container, controls);

        if let Some(authors) = publication.authors() {
            dom::append(
                &container,
                dom::create_element_with_text("div", vec![("class", "authors")], authors),
            );
        }
        if let Some(venue) = publication.venue() {
            dom::append(
                &container,
                dom::create_element_with_text("div", vec![("class", "venue")], venue),
            );
        }

        let details = dom::create_element("div", vec![("class", "pub-details"), ("hidden", "")]);
        let body = dom::create_element("div", vec![("class", "pub-details-body")]);
        dom::append(&details, body.clone());
        dom::append(&container, details.clone());
        dom::append(&entry, container);

        self.items.push(RenderedItem {
            id,
            year: year.clone(),
            publication: publication.clone(),
            detail_path: publication.detail_path(year, &self.settings.details_base),
            toggle,
            details,
            body,
        });

        entry
    }
}

/// ` [PDF] [Code]` style external links, `None` when the item has neither
fn links(publication: &Publication) -> Option<Handle> {
    let anchors: Vec<_> = [("PDF", publication.pdf()), ("Code", publication.code())]
        .into_iter()
        .filter_map(|(label, href)| {
            href.map(|href| {
                dom::create_element_with_text(
                    "a",
                    vec![("href", href), ("target", "_blank"), ("rel", "noopener")],
                    label,
                )
            })
        })
        .collect();

    if anchors.is_empty() {
        return None;
    }

    let span = dom::create_element("span", vec![("class", "links")]);
    dom::append(&span, dom::create_text(" ["));
    for (index, anchor) in anchors.into_iter().enumerate() {
        if index > 0 {
            dom::append(&span, dom::create_text("] ["));
        }
        dom::append(&span, anchor);
    }
    dom::append(&span, dom::create_text("]"));
    Some(span)
}
