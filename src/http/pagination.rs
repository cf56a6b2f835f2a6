use reqwest::header::{HeaderMap, LINK};

/// Url of the `rel="next"` entry of a `Link` header, if any.
pub fn next_page(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let url = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });

        if !is_next {
            return None;
        }

        url.strip_prefix('<')
            .and_then(|url| url.strip_suffix('>'))
            .map(str::to_owned)
    })
}
