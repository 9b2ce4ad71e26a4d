use std::ops::Range;

const SUB_HEADING_BOUNDARY: &str = "\n###";
const HEADING_BOUNDARY: &str = "\n##";

/// Locate the byte range of a category inside the document.
///
/// The span starts at the first literal occurrence of `heading` and ends at
/// the next `\n###`; when no such line follows, at the next `\n##`; otherwise
/// at end of document. Returns `None` when the heading is absent.
pub fn locate_span(document: &str, heading: &str) -> Option<Range<usize>> {
    if heading.is_empty() {
        return None;
    }
    let start = document.find(heading)?;
    // Search strictly after the heading's first char so it cannot end its own span.
    let search_from = start + document[start..].chars().next().map_or(1, char::len_utf8);
    let rest = &document[search_from..];

    let end = rest
        .find(SUB_HEADING_BOUNDARY)
        .or_else(|| rest.find(HEADING_BOUNDARY))
        .map_or(document.len(), |offset| search_from + offset);

    Some(start..end)
}
