use std::time::{Duration, Instant};

/// The text field under the tree. Edits land in `value` right away; the
/// store only sees them once the debounce window has passed.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub value: String,
    /// Byte offset, always on a char boundary.
    pub cursor: usize,
    /// Time of the last edit not yet forwarded.
    pending_since: Option<Instant>,
}

impl FilterInput {
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.pending_since = Some(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.value, self.cursor);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        self.pending_since = Some(now);
    }

    pub fn delete(&mut self, now: Instant) {
        if self.cursor >= self.value.len() {
            return;
        }
        let next = next_char_boundary(&self.value, self.cursor);
        self.value.drain(self.cursor..next);
        self.pending_since = Some(now);
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.value, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.value, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self, now: Instant) {
        if self.value.is_empty() && self.pending_since.is_none() {
            return;
        }
        self.value.clear();
        self.cursor = 0;
        self.pending_since = Some(now);
    }

    /// The value to forward if the last edit is at least `debounce` old.
    pub fn take_due(&mut self, now: Instant, debounce: Duration) -> Option<String> {
        let since = self.pending_since?;
        if now.saturating_duration_since(since) < debounce {
            return None;
        }
        self.flush()
    }

    /// Forward whatever is pending, ignoring the debounce window.
    pub fn flush(&mut self) -> Option<String> {
        self.pending_since.take().map(|_| self.value.clone())
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    fn typed(text: &str, at: Instant) -> FilterInput {
        let mut input = FilterInput::default();
        for c in text.chars() {
            input.insert_char(c, at);
        }
        input
    }

    #[test]
    fn test_not_due_inside_window() {
        let t0 = Instant::now();
        let mut input = typed("get", t0);
        assert_eq!(input.take_due(t0 + Duration::from_millis(100), DEBOUNCE), None);
        assert!(input.is_pending());
    }

    #[test]
    fn test_due_after_window_fires_once() {
        let t0 = Instant::now();
        let mut input = typed("get", t0);
        assert_eq!(input.take_due(t0 + DEBOUNCE, DEBOUNCE), Some("get".to_string()));
        assert_eq!(input.take_due(t0 + DEBOUNCE * 2, DEBOUNCE), None);
    }

    #[test]
    fn test_new_edit_restarts_window() {
        let t0 = Instant::now();
        let mut input = typed("ge", t0);
        let t1 = t0 + Duration::from_millis(250);
        input.insert_char('t', t1);
        assert_eq!(input.take_due(t0 + DEBOUNCE, DEBOUNCE), None);
        assert_eq!(input.take_due(t1 + DEBOUNCE, DEBOUNCE), Some("get".to_string()));
    }

    #[test]
    fn test_multibyte_editing() {
        let t0 = Instant::now();
        let mut input = typed("añb", t0);
        input.move_left();
        input.backspace(t0);
        assert_eq!(input.value, "ab");
        assert_eq!(input.cursor, 1);
        input.move_home();
        input.delete(t0);
        assert_eq!(input.value, "b");
    }

    #[test]
    fn test_clear_empty_input_is_noop() {
        let mut input = FilterInput::default();
        input.clear(Instant::now());
        assert!(!input.is_pending());
    }

    #[test]
    fn test_flush_ignores_window() {
        let t0 = Instant::now();
        let mut input = typed("x", t0);
        assert_eq!(input.flush(), Some("x".to_string()));
        assert!(!input.is_pending());
    }
}
