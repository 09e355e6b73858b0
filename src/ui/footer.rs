use crate::ui::shopping::ScreenMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(mode: ScreenMode) -> &'static str {
        match mode {
            ScreenMode::Browsing => {
                " a: Add Item │ ↑↓: Move │ e: Edit │ d: Delete │ q: Quit"
            }
            ScreenMode::Editing => " Tab: Next Field │ Enter: Save │ Esc: Cancel Edit",
            ScreenMode::AddDialog => " Tab: Next Field │ Enter: Add │ Esc: Cancel",
        }
    }

    pub fn widget(&self, mode: ScreenMode, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(mode);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_mode() {
        assert!(Footer::hints(ScreenMode::Browsing).contains("Add Item"));
        assert!(Footer::hints(ScreenMode::Editing).contains("Save"));
        assert!(Footer::hints(ScreenMode::AddDialog).contains("Cancel"));
    }
}
