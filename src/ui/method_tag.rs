use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::state::request::HttpMethod;

pub fn color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Rgb(158, 206, 106),     // green
        HttpMethod::Post => Color::Rgb(224, 175, 104),    // orange
        HttpMethod::Put => Color::Rgb(122, 162, 247),     // blue
        HttpMethod::Patch => Color::Rgb(187, 154, 247),   // purple
        HttpMethod::Delete => Color::Rgb(247, 118, 142),  // red
        HttpMethod::Head | HttpMethod::Options => Color::Rgb(125, 207, 255), // cyan
    }
}

/// Fixed-width method label so request names line up.
pub fn span(method: HttpMethod) -> Span<'static> {
    Span::styled(
        format!("{:<4}", method.short_label()),
        Style::default().fg(color(method)).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_is_padded() {
        assert_eq!(span(HttpMethod::Get).content, "GET ");
        assert_eq!(span(HttpMethod::Delete).content, "DEL ");
        assert_eq!(span(HttpMethod::Patch).content, "PTCH");
    }
}
