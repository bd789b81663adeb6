//! Minimal scanner for Nitter timeline pages.
//!
//! Only the handful of markers the client needs are looked at; anything else on the page is
//! ignored.

use crate::Post;

const ITEM_MARKER: &str = "class=\"timeline-item";
const CONTENT_MARKER: &str = "class=\"tweet-content";
const LINK_MARKER: &str = "class=\"tweet-link\"";
const SHOW_MORE_MARKER: &str = "class=\"show-more\"";
const ERROR_MARKER: &str = "class=\"error-panel\"";

/// One parsed timeline page.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Page {
    pub posts: Vec<Post>,
    /// Raw query (`?cursor=...`) of the next page.
    pub cursor: Option<String>,
    /// Text of the error panel, if the instance rendered one.
    pub error: Option<String>,
}

pub(crate) fn parse_timeline(html: &str, base: &str) -> Page {
    let error = find_after(html, ERROR_MARKER).map(|rest| clean_text(element_body(rest, "</div>")));

    let posts = html
        .split(ITEM_MARKER)
        .skip(1)
        .filter_map(|item| {
            let text = find_after(item, CONTENT_MARKER).map(|rest| element_body(rest, "</div>"))?;
            let text = clean_text(text);
            if text.is_empty() {
                return None;
            }

            let link = find_after(item, LINK_MARKER)
                .and_then(|rest| attribute(rest, "href"))
                .map(|href| permalink(base, href));
            Some(Post { text, link })
        })
        .collect();

    let cursor = html
        .rmatch_indices(SHOW_MORE_MARKER)
        .filter_map(|(at, _)| attribute(&html[at..], "href"))
        .find(|href| href.contains("cursor="))
        .map(decode_entities);

    Page { posts, cursor, error }
}

/// The text right after the first `marker`.
fn find_after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack.find(marker).map(|at| &haystack[at + marker.len()..])
}

/// Content between the end of the current opening tag and `closing`.
fn element_body<'a>(rest: &'a str, closing: &str) -> &'a str {
    let Some(open_end) = rest.find('>') else {
        return "";
    };
    let body = &rest[open_end + 1..];
    body.find(closing).map_or(body, |end| &body[..end])
}

/// Value of the first `name="..."` attribute in `rest`.
fn attribute<'a>(rest: &'a str, name: &str) -> Option<&'a str> {
    let start = rest.find(&format!("{name}=\""))? + name.len() + 2;
    let len = rest[start..].find('"')?;
    Some(&rest[start..start + len])
}

fn permalink(base: &str, href: &str) -> String {
    let href = href.split('#').next().unwrap_or(href);
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_owned()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), href.trim_start_matches('/'))
    }
}

/// Drops tags, decodes entities and collapses whitespace.
pub(crate) fn clean_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            },
            _ if !in_tag => text.push(c),
            _ => {},
        }
    }

    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest.find(';').filter(|&end| end <= 10).and_then(|end| {
            let entity = &rest[1..end];
            let c = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => numeric_entity(entity),
            };
            c.map(|c| (c, end + 1))
        });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            },
            None => {
                out.push('&');
                rest = &rest[1..];
            },
        }
    }

    out.push_str(rest);
    out
}

fn numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<div class="timeline">
  <div class="timeline-item show-more"><a href="/jack">Load newest</a></div>
  <div class="timeline-item " data-username="jack">
    <a class="tweet-link" href="/jack/status/20#m"></a>
    <div class="tweet-body">
      <div class="tweet-content media-body" dir="auto">just setting up my <a href="/search?q=%23twttr">#twttr</a></div>
    </div>
  </div>
  <div class="timeline-item " data-username="jack">
    <a class="tweet-link" href="/jack/status/21#m"></a>
    <div class="tweet-content media-body" dir="auto">Fish &amp; chips&#33;
       &lt;3 &#x1F600;</div>
  </div>
  <div class="timeline-item " data-username="jack">
    <a class="tweet-link" href="/jack/status/22#m"></a>
    <div class="tweet-content media-body" dir="auto">   </div>
  </div>
  <div class="show-more"><a href="?cursor=DAAB&amp;x=1">Load more</a></div>
</div>"##;

    #[test]
    fn test_parses_posts_links_and_cursor() {
        let page = parse_timeline(PAGE, "https://nitter.test/");

        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.posts[0].text, "just setting up my #twttr");
        assert_eq!(page.posts[0].link.as_deref(), Some("https://nitter.test/jack/status/20"));
        assert_eq!(page.posts[1].text, "Fish & chips! <3 \u{1F600}");
        assert_eq!(page.cursor.as_deref(), Some("?cursor=DAAB&x=1"));
        assert!(page.error.is_none());
    }

    #[test]
    fn test_reads_error_panel() {
        let html = r#"<div class="error-panel"><span>User "ghost" not found</span></div>"#;
        let page = parse_timeline(html, "http://x");
        assert!(page.posts.is_empty());
        assert_eq!(page.error.as_deref(), Some("User \"ghost\" not found"));
    }

    #[test]
    fn test_entity_edge_cases() {
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&bogus; &#xZZ; &"), "&bogus; &#xZZ; &");
        assert_eq!(decode_entities("&#39;hi&#39;"), "'hi'");
        assert_eq!(clean_text("<p>one</p><p>two</p>"), "one two");
    }
}
