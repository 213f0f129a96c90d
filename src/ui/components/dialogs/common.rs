use crate::confirm::Variant;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Theme color for a dialog variant
pub fn variant_color(variant: Variant) -> Color {
    match variant {
        Variant::Default => Color::Cyan,
        Variant::Destructive => Color::Red,
    }
}

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Text shown for a button with `label`
pub fn button_text(label: &str) -> String {
    format!("[ {} ]", label)
}

/// Display width of a button with `label`
pub fn button_width(label: &str) -> u16 {
    u16::try_from(Span::raw(button_text(label)).width()).unwrap_or(u16::MAX)
}

/// Creates a one-line button, filled with `color` when focused
pub fn create_button(label: &str, color: Color, focused: bool) -> Paragraph<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    Paragraph::new(button_text(label)).style(style)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::{Color, InstructionShortcut};

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const Y_CONFIRM: InstructionShortcut = ("y", Color::Green, " Confirm");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Switch");
}
