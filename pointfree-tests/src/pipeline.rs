//! A worked pipeline in the shape of the classic photo-feed demo: curried
//! accessors composed pointfree, lifted over a [`Task`], with rendering
//! delivered through an injected DOM-sink collaborator.

use pointfree::{compose, curry2, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub m: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub items: Vec<Photo>,
}

pub fn feed_url(term: &str) -> String {
    format!("https://photos.example/feed?tags={term}&format=json")
}

pub fn sample_feed(size: usize) -> Feed {
    Feed {
        items: (0..size)
            .map(|n| Photo {
                media: Media {
                    m: format!("https://img.example/{n}.jpg"),
                },
            })
            .collect(),
    }
}

/// Pointfree rendering: feed -> media urls -> img tags -> concatenated html.
pub fn render(feed: Feed) -> String {
    let media_url = compose(|media: Media| media.m, |photo: Photo| photo.media);
    let img = curry2(|attr: &str, src: String| format!("<img {attr}=\"{src}\" />")).apply("src");

    let srcs = move |feed: Feed| feed.items.into_iter().map(&media_url).collect::<Vec<_>>();
    let images = compose(
        move |srcs: Vec<String>| srcs.into_iter().map(|src| img.apply(src)).collect::<Vec<_>>(),
        srcs,
    );
    let page = compose(|tags: Vec<String>| tags.concat(), images);
    page(feed)
}

/// Straight-line rendering used as the bench baseline.
pub fn render_naive(feed: &Feed) -> String {
    let mut out = String::new();
    for photo in &feed.items {
        out.push_str(&format!("<img src=\"{}\" />", photo.media.m));
    }
    out
}

/// Stand-in for the out-of-scope HTTP collaborator: yields a canned feed for
/// any well-formed url, rejecting when the tag query is empty.
pub fn fetch_feed(url: String) -> Task<String, Feed> {
    Task::new(move |reject, resolve| {
        if url.contains("tags=&") {
            reject(format!("no search term in {url}"));
        } else {
            resolve(sample_feed(3));
        }
    })
}

/// The full demo wiring: term -> url -> fetch -> render -> injected sink.
pub fn app(term: &str, set_html: impl Fn(&str, String) + 'static) -> Task<String, ()> {
    fetch_feed(feed_url(term))
        .map(render)
        .map(move |html| set_html("body", html))
}
