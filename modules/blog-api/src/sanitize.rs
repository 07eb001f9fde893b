use html2text::render::TrivialDecorator;

// Wide enough that no excerpt ever wraps; a wrap-inserted newline would
// glue two words together once newlines are stripped below.
const NO_WRAP_WIDTH: usize = 10_000;

/// Strip markup from a rich-text fragment, keeping the text nodes in
/// document order, with every newline removed so the result reads as one
/// line. Malformed input degrades to best-effort extraction; a render
/// failure yields the empty string.
pub fn clean_html(html: &str) -> String {
    html2text::config::with_decorator(TrivialDecorator::new())
        .string_from_read(html.as_bytes(), NO_WRAP_WIDTH)
        .unwrap_or_default()
        .replace('\n', "")
}
