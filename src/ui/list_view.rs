//! The scrollable item list.
//!
//! Each entry is either a display row or, for the item open in the
//! editor, an editor row. Only the rows that fit in the body are laid out;
//! `ListState` scrolls so the cursor row stays visible.

use crate::store::ShoppingItem;
use crate::ui::shopping::{EditDraft, InputField, ShoppingListState};
use crate::ui::text_field::{text_field, truncate_end};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const EMPTY_HINT: &str = "No items yet. Press 'a' to add one.";
const NAME_INPUT_WIDTH: usize = 32;
const QUANTITY_INPUT_WIDTH: usize = 5;
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const MIN_QUANTITY_WIDTH: usize = 4;
/// `"  Qty: "` plus the two `"  ✎ e"` / `"  ✖ d"` hints.
const DISPLAY_FIXED_WIDTH: usize = 7 + 5 + 5;
/// `"Name "`, `"  Qty "`, `"  [Save]"`, both bracket pairs and the quantity box.
const EDITOR_FIXED_WIDTH: usize = 5 + 6 + 8 + 4 + QUANTITY_INPUT_WIDTH;

pub fn render_list(frame: &mut Frame, area: Rect, state: &ShoppingListState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.store.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_HINT,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    // Inside the borders, after the highlight column.
    let row_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let widths = RowWidths::fit(state, row_width);

    let rows: Vec<ListItem> = state
        .store
        .items()
        .iter()
        .map(|item| {
            if state.store.is_editing(item.id) {
                ListItem::new(editor_row(&state.draft, widths.editor_name))
            } else {
                ListItem::new(display_row(item, &widths))
            }
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Column widths shared by every row, so quantities and hints line up and
/// stay on screen however long a name gets.
struct RowWidths {
    name: usize,
    quantity: usize,
    editor_name: usize,
}

impl RowWidths {
    fn fit(state: &ShoppingListState, row_width: usize) -> Self {
        let items = state.store.items();
        let longest_name = items
            .iter()
            .map(|item| item.name.chars().count())
            .max()
            .unwrap_or(0);
        let quantity = items
            .iter()
            .map(|item| item.quantity.to_string().len())
            .max()
            .unwrap_or(0)
            .max(MIN_QUANTITY_WIDTH);
        let name_room = row_width.saturating_sub(DISPLAY_FIXED_WIDTH + quantity);
        Self {
            name: longest_name.min(name_room),
            quantity,
            editor_name: NAME_INPUT_WIDTH.min(row_width.saturating_sub(EDITOR_FIXED_WIDTH)),
        }
    }
}

fn display_row(item: &ShoppingItem, widths: &RowWidths) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(
                "{:<width$}",
                truncate_end(&item.name, widths.name),
                width = widths.name
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled("  Qty: ", Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(
            format!("{:<width$}", item.quantity, width = widths.quantity),
            Style::default().fg(STATUS_OK),
        ),
        Span::styled("  ✎ e", Style::default().fg(ACCENT)),
        Span::styled("  ✖ d", Style::default().fg(ACCENT)),
    ])
}

fn editor_row(draft: &EditDraft, name_width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled("Name ", Style::default().fg(HEADER_SEPARATOR))];
    spans.extend(text_field(
        &draft.name,
        draft.focus == InputField::Name,
        name_width,
    ));
    spans.push(Span::styled("  Qty ", Style::default().fg(HEADER_SEPARATOR)));
    spans.extend(text_field(
        &draft.quantity,
        draft.focus == InputField::Quantity,
        QUANTITY_INPUT_WIDTH,
    ));
    spans.push(Span::styled(
        "  [Save]",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}
