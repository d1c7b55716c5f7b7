use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Return the border style for a block, depending on whether it holds focus.
///
pub fn block_border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        active_block_border_style(theme)
    } else {
        normal_block_border_style(theme)
    }
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return a block title, bold when the block holds focus.
///
pub fn block_title(title: &str, focused: bool) -> Span<'_> {
    if focused {
        Span::styled(title, active_block_title_style())
    } else {
        Span::raw(title)
    }
}

/// Return the style for the selected list item.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for matched query text.
///
pub fn match_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Return the style for a focused button.
///
pub fn button_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.background.to_color())
            .bg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.primary.to_color())
    }
}

/// Return the style for keyboard chords in hints.
///
pub fn key_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.secondary.to_color())
        .add_modifier(Modifier::BOLD)
}
