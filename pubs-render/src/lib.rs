//! Publication list rendering for static academic sites
//!
//!     Renders a JSON list of publications, grouped by year, into a host HTML page and lazily
//!     loads per-publication markdown notes when a reader asks for them.
//!
//!     This is a pure lib: no printing, no environment variables, no global state. All I/O
//!     goes through the [`fetch::Fetcher`] trait, and every failure is turned into visible
//!     page state rather than returned to the caller.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # Error types (never cross the component boundary)
//!     ├── fetch.rs                # Fetcher trait, HTTP and directory implementations
//!     ├── markdown                # Minimal markdown -> HTML renderer
//!     │   ├── mod.rs              # Substitution pipeline
//!     │   ├── blocks.rs           # Line scanner: headings, lists, paragraphs
//!     │   └── stash.rs            # Placeholders protecting code
//!     ├── model.rs                # PublicationSet / YearGroup / Publication, slugify
//!     ├── page                    # Host page DOM (html5ever + rcdom)
//!     └── publications            # The list component
//!         ├── mod.rs              # PublicationList: mount, render, toggle
//!         ├── details.rs          # Per-item lazy load state machine
//!         ├── host.rs             # data-* attribute configuration
//!         ├── layout.rs           # Sorting and the global item cap
//!         └── settings.rs         # Ids, paths and labels
//!
//! Control Flow
//!
//!     page ready -> mount: read root config -> fetch JSON -> sort groups -> build list
//!     (grouped or flattened, capped) -> per item toggle: lazily fetch + render markdown once,
//!     then show/hide the details panel.
//!
//! Testing
//!     tests
//!     ├── common                  # Scripted in-memory fetcher
//!     ├── markdown                # Renderer output
//!     └── publications            # Mounting, capping, lazy loading, failure isolation
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod error;
pub mod fetch;
pub mod markdown;
pub mod model;
pub mod page;
pub mod publications;

pub use error::{FetchError, LoadError, PageError};
pub use fetch::{DirFetcher, Fetcher, HttpFetcher};
pub use model::{slugify, Publication, PublicationSet, Year, YearGroup};
pub use page::HostPage;
pub use publications::{
    DetailState, HostConfig, ItemId, ListStatus, PublicationList, RenderSettings, ToggleOutcome,
};
