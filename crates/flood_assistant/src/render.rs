//! Transcript rendering.
//!
//! Each render redraws the whole log. Answer bodies carry light HTML markup
//! (`<strong>`, `<br>`); plain mode turns line breaks into newlines and drops
//! every other tag.

use crate::config::MarkupMode;
use crate::message::{ConversationMessage, Sender};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub markup: MarkupMode,
}

/// Strip markup for terminal display.
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('>') else {
            // unterminated tag, keep verbatim
            out.push_str(&rest[start..]);
            return out;
        };
        let tag = &rest[start + 1..start + len];
        rest = &rest[start + len + 1..];

        if is_line_break(tag) {
            out.push('\n');
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

fn is_line_break(tag: &str) -> bool {
    let name = tag.trim().trim_end_matches('/').trim();
    name.eq_ignore_ascii_case("br")
}

fn label(sender: Sender, color: bool) -> String {
    let text = format!("[{}]", sender);
    if !color {
        return text;
    }
    match sender {
        Sender::User => text.bright_cyan().to_string(),
        Sender::Assistant => text.bright_green().to_string(),
    }
}

/// Render one message as a block: label, then the body with continuation
/// lines indented under it.
pub fn render_message(message: &ConversationMessage, options: RenderOptions) -> String {
    let body = match options.markup {
        MarkupMode::Plain => strip_markup(&message.content),
        MarkupMode::Raw => message.content.clone(),
    };
    let indent = " ".repeat(format!("[{}] ", message.sender).len());

    let mut lines = body.lines();
    let mut out = format!(
        "{} {}",
        label(message.sender, options.color),
        lines.next().unwrap_or_default()
    );
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
    }
    out
}

/// Render the full log, one blank line between messages.
pub fn render_transcript(messages: &[ConversationMessage], options: RenderOptions) -> String {
    messages
        .iter()
        .map(|m| render_message(m, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;

    #[test]
    fn test_strip_markup() {
        let html = "<strong>Title:</strong><br><br>\n1. one<br>\n2. two";
        assert_eq!(strip_markup(html), "Title:\n\n1. one\n2. two");
    }

    #[test]
    fn test_strip_self_closing_break() {
        assert_eq!(strip_markup("a<br/>b<BR />c"), "a\nb\nc");
    }

    #[test]
    fn test_unterminated_tag_kept() {
        assert_eq!(strip_markup("depth < 2m"), "depth < 2m");
    }

    #[test]
    fn test_render_transcript_plain() {
        let mut log = MessageLog::new();
        log.append(Sender::User, "flood warning?");
        log.append(Sender::Assistant, "<strong>Steps:</strong><br>\n1. Go up");

        let text = render_transcript(log.messages(), RenderOptions::default());
        assert_eq!(text, "[you] flood warning?\n\n[assistant] Steps:\n            1. Go up");
    }

    #[test]
    fn test_render_raw_keeps_markup() {
        let mut log = MessageLog::new();
        log.append(Sender::Assistant, "<strong>x</strong>");
        let options = RenderOptions {
            color: false,
            markup: MarkupMode::Raw,
        };
        assert_eq!(render_message(&log.messages()[0], options), "[assistant] <strong>x</strong>");
    }
}
