use crate::ui::add_dialog::render_add_dialog;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list_view::render_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new(app.title()).widget(&state.store), header);
    frame.render_widget(Clear, body);
    render_list(frame, body, state);
    frame.render_widget(Footer::new().widget(state.mode(), footer), footer);

    render_add_dialog(frame, body, &state.dialog);
}
