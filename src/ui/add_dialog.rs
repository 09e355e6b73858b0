//! The "Add Shopping Item" modal.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::shopping::{AddDialogState, InputField};
use crate::ui::text_field::text_field;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 9;
const INPUT_WIDTH: usize = 28;
/// Field label plus the input's brackets.
const INPUT_FIXED_WIDTH: usize = 11 + 2;

/// Render the dialog over `area`. Does nothing while hidden.
pub fn render_add_dialog(frame: &mut Frame, area: Rect, state: &AddDialogState) {
    let AddDialogState::Visible {
        name,
        quantity,
        focus,
        error,
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Add Shopping Item ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let input_width = INPUT_WIDTH.min(
        (area.width as usize)
            .saturating_sub(2)
            .saturating_sub(INPUT_FIXED_WIDTH),
    );

    let label_style = Style::default().fg(HEADER_SEPARATOR);

    let mut name_line = vec![Span::styled(" Name      ", label_style)];
    name_line.extend(text_field(name, *focus == InputField::Name, input_width));

    let mut quantity_line = vec![Span::styled(" Quantity  ", label_style)];
    quantity_line.extend(text_field(quantity, *focus == InputField::Quantity, input_width));

    let error_line = match error {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(""),
        Line::from(name_line),
        Line::from(quantity_line),
        error_line,
        Line::from(vec![
            Span::styled("   [ Add ]", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  Enter", label_style),
            Span::raw("     "),
            Span::styled("[ Cancel ]", Style::default().fg(HEADER_TEXT)),
            Span::styled("  Esc", label_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
