use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Emitted when no input arrived within the poll interval; drives the filter debounce.
    Tick,
    Resize(u16, u16),
}
