use maud::Escaper;
use std::fmt::Write;

/// Escapes `&`, `<`, `>`, `"` and `'` so arbitrary text can be interpolated
/// into markup, including single-quoted attributes. Every renderer routes
/// untrusted text through here.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = Escaper::new(&mut escaped).write_str(text);
    if escaped.contains('\'') {
        escaped = escaped.replace('\'', "&#39;");
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(escape_html("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
        assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_escapes_single_quotes() {
        assert_eq!(
            escape_html("O'Brien \"x\" <b>&"),
            "O&#39;Brien &quot;x&quot; &lt;b&gt;&amp;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Rust 2021"), "Rust 2021");
        assert_eq!(escape_html(""), "");
    }
}
