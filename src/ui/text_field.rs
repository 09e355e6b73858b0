use crate::ui::theme::{FOCUSED_INPUT, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const CARET: char = '▏';
const ELLIPSIS: char = '…';

/// Render a single-line text input as `[value   ]`, exactly `width` chars
/// between the brackets.
///
/// The focused input shows a caret after its value. Values that do not fit
/// keep their tail (where typing happens) behind a leading ellipsis.
pub fn text_field(value: &str, focused: bool, width: usize) -> Vec<Span<'static>> {
    let mut content = value.to_string();
    if focused {
        content.push(CARET);
    }
    let mut content = keep_tail(&content, width);
    let padding = width.saturating_sub(content.chars().count());
    content.push_str(&" ".repeat(padding));

    let (bracket_style, value_style) = if focused {
        (
            Style::default().fg(FOCUSED_INPUT).add_modifier(Modifier::BOLD),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED),
        )
    } else {
        (
            Style::default().fg(HEADER_SEPARATOR),
            Style::default().fg(HEADER_TEXT),
        )
    };

    vec![
        Span::styled("[", bracket_style),
        Span::styled(content, value_style),
        Span::styled("]", bracket_style),
    ]
}

/// Cut `text` to at most `max_width` chars, ending in `…` when shortened.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_width - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

fn keep_tail(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut tail = String::from(ELLIPSIS);
    tail.extend(text.chars().skip(len - (max_width - 1)));
    tail
}
