/// Reduces user-supplied text to plain text before it is stored.
///
/// Every tag is dropped; `<script>` and `<style>` lose their body as well.
/// Text content comes back as typed (`&`, `<` are not left as entities),
/// so the result is plain text and must be escaped by whatever renders it.
/// Surrounding whitespace is trimmed.
pub fn strip_html(input: &str) -> String {
    let cleaned = ammonia::Builder::empty().clean(input).to_string();
    unescape(&cleaned).trim().to_string()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
