//! Knobs the embedding site controls; the defaults reproduce the stock page

/// Where the component mounts and what it writes into the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// `id` of the container the list is rendered into
    pub root_id: String,
    /// `id` of the element whose static fallback content gets hidden
    pub placeholder_scope: String,
    /// Classes identifying static fallback content inside the scope
    pub placeholder_classes: Vec<String>,
    /// Data source used when the root has no `data-source` attribute
    pub default_source: String,
    /// Directory derived detail paths live under
    pub details_base: String,
    pub labels: Labels,
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Toggle label while the details are hidden
    pub show: String,
    /// Toggle label while the details are shown
    pub hide: String,
    pub loading: String,
    pub detail_unavailable: String,
    pub list_failed: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            root_id: "pub-root".to_string(),
            placeholder_scope: "publications".to_string(),
            placeholder_classes: vec!["pub-year".to_string(), "pub-list".to_string()],
            default_source: "assets/data/publications.json".to_string(),
            details_base: "assets/pubs".to_string(),
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show: "Details".to_string(),
            hide: "Hide".to_string(),
            loading: "Loading…".to_string(),
            detail_unavailable: "Details not available yet.".to_string(),
            list_failed: "Failed to load publications. Please try refreshing the page."
                .to_string(),
        }
    }
}
