use crate::ui::app::App;
use crate::ui::shopping::{ScreenMode, ShoppingIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.state().mode() {
        ScreenMode::AddDialog => handle_dialog_key(app, key),
        ScreenMode::Editing => handle_editor_key(app, key),
        ScreenMode::Browsing => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let selected = app.state().selected_item().map(|item| item.id);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.dispatch(ShoppingIntent::OpenAddDialog),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(ShoppingIntent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(ShoppingIntent::CursorDown),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = selected {
                app.dispatch(ShoppingIntent::BeginEdit { id });
            }
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(id) = selected {
                app.dispatch(ShoppingIntent::Delete { id });
            }
        }
        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(ShoppingIntent::CancelAddDialog),
        KeyCode::Enter => app.dispatch(ShoppingIntent::ConfirmAdd),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch(ShoppingIntent::DialogToggleField),
        KeyCode::Backspace => app.dispatch(ShoppingIntent::DialogBackspace),
        KeyCode::Char(ch) if is_text_input(key) => app.dispatch(ShoppingIntent::DialogInput(ch)),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(ShoppingIntent::CancelEdit),
        KeyCode::Enter => app.dispatch(ShoppingIntent::CommitEdit),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch(ShoppingIntent::EditorToggleField),
        KeyCode::Backspace => app.dispatch(ShoppingIntent::EditorBackspace),
        KeyCode::Char(ch) if is_text_input(key) => app.dispatch(ShoppingIntent::EditorInput(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

fn is_text_input(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
