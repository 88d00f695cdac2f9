/// Renderer trait: one implementation per screen, drawing a view into a ratatui frame
use ratatui::Frame;

pub trait ScreenRenderer<V> {
    /// Draw `view` over the whole frame. Pure: no game logic, no input handling.
    fn render(frame: &mut Frame, view: &V);
}
