use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shopping_list::store::ItemId;
use shopping_list::ui::app::App;
use shopping_list::ui::render::draw;
use shopping_list::ui::shopping::ShoppingIntent;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 20;

fn render_lines(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(WIDTH as usize)
        .map(|row| row.concat())
        .collect()
}

fn screen(app: &App) -> String {
    render_lines(app).join("\n")
}

fn add(app: &mut App, name: &str, quantity: &str) {
    app.dispatch(ShoppingIntent::OpenAddDialog);
    for ch in name.chars() {
        app.dispatch(ShoppingIntent::DialogInput(ch));
    }
    app.dispatch(ShoppingIntent::DialogToggleField);
    for ch in quantity.chars() {
        app.dispatch(ShoppingIntent::DialogInput(ch));
    }
    app.dispatch(ShoppingIntent::ConfirmAdd);
}

#[test]
fn empty_list_shows_hint() {
    let app = App::new("Groceries");
    let screen = screen(&app);
    assert!(screen.contains("Groceries"));
    assert!(screen.contains("No items yet"));
    assert!(screen.contains("a: Add Item"));
}

#[test]
fn display_rows_show_name_and_quantity() {
    let mut app = App::new("Groceries");
    add(&mut app, "Milk", "2");
    add(&mut app, "Eggs", "12");
    let screen = screen(&app);
    assert!(screen.contains("Milk"));
    assert!(screen.contains("Qty: 2"));
    assert!(screen.contains("Eggs"));
    assert!(screen.contains("Qty: 12"));
    assert!(screen.contains("2 items"));
    assert!(screen.contains("Total qty: 14"));
}

#[test]
fn editor_row_replaces_display_row() {
    let mut app = App::new("Groceries");
    add(&mut app, "Milk", "2");
    add(&mut app, "Eggs", "12");
    app.dispatch(ShoppingIntent::BeginEdit { id: ItemId(1) });
    let screen = screen(&app);
    assert!(screen.contains("[Save]"));
    assert!(screen.contains("[Milk▏"));
    assert!(!screen.contains("Qty: 2 "));
    assert!(screen.contains("Qty: 12"));
    assert!(screen.contains("Enter: Save"));
}

#[test]
fn dialog_renders_over_list() {
    let mut app = App::new("Groceries");
    app.dispatch(ShoppingIntent::OpenAddDialog);
    for ch in "Tea".chars() {
        app.dispatch(ShoppingIntent::DialogInput(ch));
    }
    let screen = screen(&app);
    assert!(screen.contains("Add Shopping Item"));
    assert!(screen.contains("[Tea▏"));
    assert!(screen.contains("[ Add ]"));
    assert!(screen.contains("[ Cancel ]"));
}

#[test]
fn dialog_shows_validation_error() {
    let mut app = App::new("Groceries");
    add(&mut app, "Milk", "lots");
    let screen = screen(&app);
    assert!(screen.contains("Add Shopping Item"));
    assert!(screen.contains("not a whole number"));
}

#[test]
fn long_list_keeps_cursor_row_visible() {
    let mut app = App::new("Groceries");
    for index in 0..40 {
        add(&mut app, &format!("Item{:02}", index), "1");
    }
    let screen = screen(&app);
    assert!(screen.contains("Item39"));
    assert!(!screen.contains("Item00"));
}

fn long_name() -> String {
    "Extra virgin olive oil ".repeat(4).trim_end().to_string()
}

#[test]
fn long_name_does_not_push_columns_off_screen() {
    let mut app = App::new("Groceries");
    add(&mut app, "Milk", "2");
    add(&mut app, &long_name(), "5");
    let lines = render_lines(&app);

    let milk_row = lines.iter().find(|line| line.contains("Milk")).unwrap();
    assert!(milk_row.contains("Qty: 2"));
    assert!(milk_row.contains("✖ d"));

    let long_row = lines.iter().find(|line| line.contains("Extra virgin")).unwrap();
    assert!(long_row.contains("…"));
    assert!(long_row.contains("Qty: 5"));
    assert!(long_row.contains("✎ e"));
    assert!(long_row.contains("✖ d"));
}

#[test]
fn long_draft_keeps_save_action_visible() {
    let mut app = App::new("Groceries");
    add(&mut app, "Milk", "2");
    add(&mut app, &long_name(), "5");
    app.dispatch(ShoppingIntent::BeginEdit { id: ItemId(2) });
    let lines = render_lines(&app);

    let editor_row = lines.iter().find(|line| line.contains("[Save]")).unwrap();
    assert!(editor_row.contains("olive oil▏"));
    assert!(editor_row.contains("Qty [5"));
    assert!(screen(&app).contains("Qty: 2"));
}

#[test]
fn dialog_keeps_caret_visible_while_typing_long_name() {
    let mut app = App::new("Groceries");
    app.dispatch(ShoppingIntent::OpenAddDialog);
    for ch in "abcdefghij".repeat(6).chars() {
        app.dispatch(ShoppingIntent::DialogInput(ch));
    }
    let lines = render_lines(&app);
    let name_row = lines.iter().find(|line| line.contains(" Name ")).unwrap();
    assert!(name_row.contains("[…"));
    assert!(name_row.contains("ghij▏]"));
}
