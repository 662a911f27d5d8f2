//! Shared configuration loader for the publication list renderer.
//!
//! `defaults/pubs.default.toml` is embedded so that documentation and runtime behavior stay
//! in sync. Sites layer their own files on top of those defaults via [`Loader`] before
//! deserializing into [`PubsConfig`], which converts into the renderer's
//! [`RenderSettings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pubs_render::publications::{Labels, RenderSettings};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pubs.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PubsConfig {
    pub host: HostSection,
    pub data: DataSection,
    pub labels: LabelsSection,
}

/// Where the component lives in the page
#[derive(Debug, Clone, Deserialize)]
pub struct HostSection {
    pub root_id: String,
    pub placeholder_scope: String,
    pub placeholder_classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    pub source: String,
    pub details_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsSection {
    pub show: String,
    pub hide: String,
    pub loading: String,
    pub detail_unavailable: String,
    pub list_failed: String,
}

impl From<LabelsSection> for Labels {
    fn from(labels: LabelsSection) -> Self {
        Labels {
            show: labels.show,
            hide: labels.hide,
            loading: labels.loading,
            detail_unavailable: labels.detail_unavailable,
            list_failed: labels.list_failed,
        }
    }
}

impl From<PubsConfig> for RenderSettings {
    fn from(config: PubsConfig) -> Self {
        RenderSettings {
            root_id: config.host.root_id,
            placeholder_scope: config.host.placeholder_scope,
            placeholder_classes: config.host.placeholder_classes,
            default_source: config.data.source,
            details_base: config.data.details_base,
            labels: config.labels.into(),
        }
    }
}

impl From<&PubsConfig> for RenderSettings {
    fn from(config: &PubsConfig) -> Self {
        config.clone().into()
    }
}

/// Name of the optional per-site file picked up by [`Loader::for_site`]
pub const SITE_FILE: &str = "pubs.toml";

/// Layers site configuration over the embedded defaults and produces [`RenderSettings`].
///
/// Later layers win: defaults, then files in the order given, then single-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Defaults plus `<site_dir>/pubs.toml` when the site ships one
    pub fn for_site(site_dir: impl AsRef<Path>) -> Self {
        Self::new().layer(site_dir.as_ref().join(SITE_FILE), false)
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path, true)
    }

    /// Layer a TOML file, skipping it when absent
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path, false)
    }

    fn layer(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let file = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Override one dotted key, e.g. `labels.show` or `data.details_base`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// The merged configuration, section by section
    pub fn config(self) -> Result<PubsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// The merged configuration as the renderer consumes it
    pub fn settings(self) -> Result<RenderSettings, ConfigError> {
        self.config().map(RenderSettings::from)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
