use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home_screen;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.ui_state()), header);
    frame.render_widget(Clear, body);
    render_home_screen(frame, body, app.ui_state(), app.tick());
    frame.render_widget(Footer::new(app.ui_state()), footer);
}
