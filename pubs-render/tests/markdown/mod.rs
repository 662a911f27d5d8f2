//! Markdown renderer tests
//!
//! Output of the detail-file dialect, stage by stage and on whole documents.

mod render;
