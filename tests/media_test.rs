#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::fs;

use rs_pismo::{Document, ExternalAttributeProvider, Options};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {path}: {e}"))
}

const YOUTUBE_SRC: &str =
    "http://www.youtube.com/v/dBtYXFXa5Ig?fs=1&hl=en_US&rel=0&color1=0xFFFFFF&color2=0xFFFFFF&border=0";

#[test]
fn all_images_keeps_relative_images_without_base() {
    let options = Options {
        all_images: true,
        ..Options::default()
    };
    let doc = Document::from_html(&fixture("relative_imgs.html"), options);

    let images = doc.images();
    assert!(images.contains(&"/wp-content/uploads/2010/01/coffeescript.png".to_string()));
    assert_eq!(images.len(), 4);
}

#[test]
fn images_are_off_by_default() {
    let doc = Document::from_html(&fixture("relative_imgs.html"), Options::default());
    assert!(doc.images().is_empty());
}

#[test]
fn size_filter_drops_small_and_undeclared_images() {
    let options = Options {
        image_extractor: true,
        ..Options::default()
    };
    let doc = Document::from_html(&fixture("relative_imgs.html"), options);

    assert_eq!(
        doc.images(),
        vec![
            "http://www.rubyinside.com/wp-content/uploads/2010/01/banner.jpg",
            "images/diagram.png"
        ]
    );
}

#[test]
fn filtered_images_are_a_subset_of_all_images() {
    let html = fixture("relative_imgs.html");

    for (width, height) in [(0, 0), (50, 50), (100, 100), (500, 250), (10_000, 10_000)] {
        let filtered = Document::from_html(
            &html,
            Options {
                image_extractor: true,
                min_image_width: width,
                min_image_height: height,
                ..Options::default()
            },
        )
        .images();
        let all = Document::from_html(
            &html,
            Options {
                all_images: true,
                min_image_width: width,
                min_image_height: height,
                ..Options::default()
            },
        )
        .images();

        assert!(filtered.iter().all(|img| all.contains(img)), "{width}x{height}");
    }
}

#[test]
fn relative_images_resolve_against_base_url() {
    let options = Options {
        all_images: true,
        url: Some("http://www.rubyinside.com/2010/01/coffeescript-post/".to_string()),
        ..Options::default()
    };
    let doc = Document::from_html(&fixture("relative_imgs.html"), options);

    assert_eq!(
        doc.images(),
        vec![
            "http://www.rubyinside.com/wp-content/uploads/2010/01/coffeescript.png",
            "http://www.rubyinside.com/wp-content/uploads/2010/01/banner.jpg",
            "http://www.rubyinside.com/2010/01/images/thumb.gif",
            "http://www.rubyinside.com/2010/01/coffeescript-post/images/diagram.png",
        ]
    );
}

#[test]
fn root_relative_image_resolves_against_page_url() {
    let options = Options {
        all_images: true,
        url: Some("http://example.com/page".to_string()),
        ..Options::default()
    };
    let doc = Document::from_html(r#"<body><img src="/img/a.png"></body>"#, options);
    assert_eq!(doc.images(), vec!["http://example.com/img/a.png"]);
}

#[test]
fn embedded_video_is_reported_once() {
    let doc = Document::from_html(&fixture("videos.html"), Options::default());

    let videos = doc.videos();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].src(), YOUTUBE_SRC);
    assert_eq!(videos[0].get("type"), Some("application/x-shockwave-flash"));
    assert_eq!(videos[0].get("allowfullscreen"), Some("true"));
}

#[test]
fn identical_embeds_are_not_deduplicated() {
    let html = format!(
        r#"<body><embed src="{src}"><p>again</p><embed src="{src}"></body>"#,
        src = YOUTUBE_SRC.replace('&', "&amp;")
    );
    let doc = Document::from_html(&html, Options::default());

    let videos = doc.videos();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v.src() == YOUTUBE_SRC));
}

#[test]
fn page_without_media_is_empty() {
    let options = Options {
        all_images: true,
        ..Options::default()
    };
    let doc = Document::from_html("<html><body><p>Only words here.</p></body></html>", options);

    assert!(doc.images().is_empty());
    assert!(doc.videos().is_empty());
    assert!(doc.favicon().is_none());
    assert!(doc.feeds().is_empty());
}

#[test]
fn favicon_and_feeds_resolve_against_base_url() {
    let options = Options {
        url: Some("http://www.rubyinside.com/coffeescript.html".to_string()),
        ..Options::default()
    };
    let doc = Document::from_html(&fixture("rubyinside.html"), options);

    assert_eq!(doc.favicon().as_deref(), Some("http://www.rubyinside.com/favicon.ico"));
    assert_eq!(doc.feeds(), vec!["http://www.rubyinside.com/feed"]);
}
