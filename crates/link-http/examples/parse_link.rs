use http::header::LINK;
use http::{HeaderMap, HeaderValue};
use micro_link_http::{LinksExt, links_from_headers};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut headers = HeaderMap::new();
    headers.append(LINK, HeaderValue::from_static(r#"</TheBook/chapter2>; rel="previous"; title*=UTF-8'de'letztes%20Kapitel"#));
    headers.append(LINK, HeaderValue::from_static(r#"</TheBook/chapter4>; rel="next"; title*=UTF-8'de'n%c3%a4chstes%20Kapitel"#));
    headers.append(LINK, HeaderValue::from_static(r#"</TheBook/notes>; title="unterminated; crossorigin"#));

    let links = match links_from_headers(&headers) {
        Ok(links) => links,
        Err(e) => {
            error!(cause = %e, "failed to read link header");
            return;
        }
    };

    for link in &links {
        let title = link.param("title");
        info!(
            uri = link.uri(),
            rel = link.rel(),
            title = title.map(|title| title.value()),
            language = title.map(|title| title.language()),
            "parsed link"
        );
    }

    match links.by_rel().uri("next") {
        Some(next) => info!(next, "following next link"),
        None => info!("no next link"),
    }
}
