use pulldown_cmark::{html, Event, Parser};
use std::io::IsTerminal;
use termimad::MadSkin;

/// Renders a model reply as block-quoted markdown.  Bullets ("•") become
/// markdown list markers and every line, blank or not, gets a "> " prefix.
pub fn to_markdown(text: &str) -> String {
    split_lines(&text.replace('•', "*"))
        .into_iter()
        .map(|line| format!("> {line}"))
        .collect()
}

/// Splits after every line boundary, keeping the boundary on its line.
/// Boundaries are "\r\n" and any single character in LINE_BREAKS.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some((_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }

        lines.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Renders markdown to html for the web page.  Raw html in the reply is escaped,
/// never passed through.
pub fn to_html(markdown: &str) -> String {
    let events = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });

    let mut rendered = String::new();
    html::push_html(&mut rendered, events);
    rendered
}

/// Renders markdown for a terminal, or leaves it as is when stdout is not one.
pub fn to_terminal(markdown: &str) -> String {
    render_terminal(markdown, std::io::stdout().is_terminal())
}

fn render_terminal(markdown: &str, styled: bool) -> String {
    if !styled {
        return markdown.to_string();
    }

    let skin = MadSkin::default();
    skin.term_text(markdown).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_and_quotes() {
        let reply = "시베리아 호랑이는 멸종 위기종입니다.\n• 단계: 멸종 위기(EN)\n• 서식지: 러시아 극동";

        assert_eq!(
            to_markdown(reply),
            "> 시베리아 호랑이는 멸종 위기종입니다.\n> * 단계: 멸종 위기(EN)\n> * 서식지: 러시아 극동"
        );
    }

    #[test]
    fn test_blank_lines_are_quoted() {
        assert_eq!(to_markdown("a\n\nb\n"), "> a\n> \n> b\n");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(to_markdown("멸종 위기 아님"), "> 멸종 위기 아님");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_markdown(""), "");
    }

    #[test]
    fn test_other_line_boundaries() {
        assert_eq!(to_markdown("a\rb"), "> a\r> b");
        assert_eq!(to_markdown("a\r\nb"), "> a\r\n> b");
        assert_eq!(to_markdown("a\u{2028}b\u{0b}c"), "> a\u{2028}> b\u{0b}> c");
    }

    #[test]
    fn test_html_has_quote_and_list() {
        let html = to_html(&to_markdown("• 단계: **EN**\n• 서식지: 러시아 극동"));

        assert!(html.contains("<blockquote>"), "{html}");
        assert!(html.contains("<li>단계: <strong>EN</strong></li>"), "{html}");
        assert!(html.contains("<li>서식지: 러시아 극동</li>"), "{html}");
        assert!(!html.contains('•'), "{html}");
    }

    #[test]
    fn test_html_escapes_raw_html() {
        let html = to_html(&to_markdown("<script>alert(1)</script>\n<b>EN</b>"));

        assert!(!html.contains("<script>"), "{html}");
        assert!(!html.contains("<b>"), "{html}");
        assert!(html.contains("&lt;script&gt;"), "{html}");
    }

    #[test]
    fn test_terminal_rendering() {
        let markdown = to_markdown("• 단계: **EN**");

        assert_eq!(render_terminal(&markdown, false), markdown);

        let styled = render_terminal(&markdown, true);
        assert!(styled.contains("EN"), "{styled}");
        assert!(!styled.contains("**"), "{styled}");
    }
}
