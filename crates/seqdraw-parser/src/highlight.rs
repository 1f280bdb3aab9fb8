//! HTML syntax highlighting from scanned tokens.
//!
//! Editors show the source with each token wrapped in a `<span>` carrying a
//! CSS class. Text that is not part of a classified token, such as
//! whitespace, parentheses or characters the scanner rejected, is copied
//! through unchanged apart from HTML escaping, so the highlighted text always
//! reads exactly like the source.

use crate::{
    span::Span,
    tokens::{Token, TokenKind},
};

/// The CSS class for a token kind, or `None` if it is left unstyled.
pub fn token_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Actor => Some("class_token_actor"),
        TokenKind::Action => Some("class_token_action"),
        TokenKind::Identifier => Some("class_token_identifier"),
        TokenKind::String => Some("class_token_string"),
        TokenKind::Equal => Some("class_token_equal"),
        TokenKind::Semicolon => Some("class_token_semicolon"),
        TokenKind::LeftArrow => Some("class_token_leftarrow"),
        TokenKind::RightArrow => Some("class_token_rightarrow"),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::Error
        | TokenKind::Eof => None,
    }
}

/// The source text a highlighted token covers.
///
/// String tokens span only their content; the highlighted text includes the
/// surrounding quotes.
fn highlighted_span(token: &Token) -> Span {
    match token.kind() {
        TokenKind::String => Span::new(token.start().saturating_sub(1)..token.end() + 1),
        _ => token.span(),
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Render `source` as HTML, wrapping every classified token in a span.
///
/// `tokens` must come from scanning `source`.
///
/// # Examples
///
/// ```
/// # use seqdraw_parser::{highlight, scan};
/// let source = "actor a = \"A\";";
/// let html = highlight(source, scan(source).tokens());
///
/// assert!(html.starts_with("<span class=\"class_token_actor\">actor</span> "));
/// assert!(html.contains("<span class=\"class_token_string\">&quot;A&quot;</span>"));
/// ```
pub fn highlight(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() * 4);
    let mut cursor = 0;

    for token in tokens {
        let Some(class) = token_class(token.kind()) else {
            continue;
        };
        let span = highlighted_span(token);
        if span.start() < cursor || span.end() > source.len() {
            continue;
        }

        push_escaped(&mut out, Span::new(cursor..span.start()).slice(source));
        out.push_str("<span class=\"");
        out.push_str(class);
        out.push_str("\">");
        push_escaped(&mut out, span.slice(source));
        out.push_str("</span>");
        cursor = span.end();
    }

    push_escaped(&mut out, Span::new(cursor..source.len()).slice(source));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;

    fn render(source: &str) -> String {
        highlight(source, scan(source).tokens())
    }

    #[test]
    fn test_action_statement() {
        assert_eq!(
            render("action a -> b = \"hi\";"),
            "<span class=\"class_token_action\">action</span> \
             <span class=\"class_token_identifier\">a</span> \
             <span class=\"class_token_rightarrow\">-&gt;</span> \
             <span class=\"class_token_identifier\">b</span> \
             <span class=\"class_token_equal\">=</span> \
             <span class=\"class_token_string\">&quot;hi&quot;</span>\
             <span class=\"class_token_semicolon\">;</span>"
        );
    }

    #[test]
    fn test_unclassified_text_is_kept() {
        assert_eq!(
            render("(\n)"),
            "(\n)"
        );
        assert_eq!(render("a <- & b"), concat!(
            "<span class=\"class_token_identifier\">a</span> ",
            "<span class=\"class_token_leftarrow\">&lt;-</span> &amp; ",
            "<span class=\"class_token_identifier\">b</span>",
        ));
    }

    #[test]
    fn test_unterminated_string_is_plain_text() {
        assert_eq!(
            render("\"open\nactor"),
            "&quot;open\n<span class=\"class_token_actor\">actor</span>"
        );
    }

    #[test]
    fn test_token_class() {
        assert_eq!(token_class(TokenKind::Actor), Some("class_token_actor"));
        assert_eq!(token_class(TokenKind::LeftParen), None);
        assert_eq!(token_class(TokenKind::Eof), None);
    }
}
