//! End to end against a site directory on disk

use pubs_render::{DirFetcher, HostPage, ItemId, ListStatus, PublicationList, RenderSettings};
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_render_from_site_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets/data")).unwrap();
    fs::create_dir_all(dir.path().join("assets/pubs/2022")).unwrap();
    fs::write(
        dir.path().join("assets/data/publications.json"),
        r#"{"years": [{"year": 2022, "items": [{"title": "Fast Graphs: A Study"}]}]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("assets/pubs/2022/fast-graphs-a-study.md"),
        "### Citation\n\n`@article{fast}`",
    )
    .unwrap();

    let page = HostPage::parse(r#"<div id="pub-root" data-flat="true"></div>"#);
    let list =
        PublicationList::mount(page, DirFetcher::new(dir.path()), RenderSettings::default()).await;
    assert_eq!(list.status(), ListStatus::Rendered { count: 1 });

    list.toggle(ItemId(0)).await;
    let html = list.item(ItemId(0)).unwrap().details_html().unwrap();
    assert_eq!(html, "<h3>Citation</h3>\n<p><code>@article{fast}</code></p>");
}

#[tokio::test]
async fn test_missing_site_directory() {
    let dir = tempdir().unwrap();
    let page = HostPage::parse(r#"<div id="pub-root"></div>"#);
    let list =
        PublicationList::mount(page, DirFetcher::new(dir.path()), RenderSettings::default()).await;

    assert_eq!(list.status(), ListStatus::Failed);
}
