#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Filter,
}

impl Focus {
    /// Two panes, so next and prev are the same toggle.
    pub fn next(&self) -> Focus {
        match self {
            Focus::Sidebar => Focus::Filter,
            Focus::Filter => Focus::Sidebar,
        }
    }

    pub fn prev(&self) -> Focus {
        self.next()
    }
}
