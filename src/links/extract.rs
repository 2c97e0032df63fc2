use scraper::{Html, Selector};

/// Collect the `href` of every anchor in the page, in document order.
///
/// Parsing is best effort: broken markup yields whatever anchors html5ever
/// can recover, and anchors with an empty `href` are skipped.
pub fn extract_links(content: &str) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let document = Html::parse_document(content);

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
