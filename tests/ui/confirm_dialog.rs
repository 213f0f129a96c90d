use crate::support::{buffer_text, click, find_text, key, terminal};
use confirmist::config::Config;
use confirmist::confirm::{Confirmation, ConfirmOptions, ConflictPolicy};
use confirmist::ui::components::{ConfirmDialog, DialogButton};
use confirmist::ui::core::{Action, Component, ConfirmProvider};
use crossterm::event::{KeyCode, MouseEvent};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Color, Terminal};
use std::time::Duration;

fn draw(terminal: &mut Terminal<TestBackend>, dialog: &mut ConfirmDialog) {
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area);
        })
        .unwrap();
}

fn empty_screen() -> Buffer {
    Buffer::empty(Rect::new(0, 0, 80, 24))
}

fn center(area: Rect) -> (u16, u16) {
    (area.x + area.width / 2, area.y)
}

async fn resolved(confirmation: Confirmation) -> Option<bool> {
    tokio::time::timeout(Duration::from_millis(200), confirmation).await.ok()
}

#[test]
fn test_idle_renders_nothing() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    draw(&mut terminal, &mut dialog);

    assert!(!dialog.is_visible());
    assert_eq!(terminal.backend().buffer(), &empty_screen());
}

#[test]
fn test_default_labels_are_rendered() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    let _confirmation = provider.handle().confirm(ConfirmOptions::new("Delete item?"));
    draw(&mut terminal, &mut dialog);

    let buffer = terminal.backend().buffer();
    assert!(find_text(buffer, "Delete item?").is_some());
    assert!(find_text(buffer, "[ Confirm ]").is_some());
    assert!(find_text(buffer, "[ Cancel ]").is_some());
}

#[test]
fn test_description_is_rendered() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    let _confirmation = provider
        .handle()
        .confirm(ConfirmOptions::new("Reset?").description("Tokens go back to defaults"));
    draw(&mut terminal, &mut dialog);

    assert!(buffer_text(terminal.backend().buffer()).contains("Tokens go back to defaults"));
}

#[tokio::test]
async fn test_end_to_end_destructive_confirm() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    let confirmation = provider
        .handle()
        .confirm(ConfirmOptions::new("Delete?").destructive());
    draw(&mut terminal, &mut dialog);

    // Destructive styling on the title
    let (x, y) = find_text(terminal.backend().buffer(), "Delete?").unwrap();
    assert_eq!(terminal.backend().buffer()[(x, y)].fg, Color::Red);

    let (cx, cy) = center(dialog.button_area(DialogButton::Confirm).unwrap());
    assert_eq!(dialog.handle_mouse_events(click(cx, cy)), Action::None);

    assert_eq!(resolved(confirmation).await, Some(true));
    draw(&mut terminal, &mut dialog);
    assert!(!dialog.is_visible());
    assert_eq!(terminal.backend().buffer(), &empty_screen());
}

#[tokio::test]
async fn test_dismissal_paths_are_equivalent() {
    enum Dismissal {
        CancelButton,
        Escape,
        OutsideClick,
    }

    for dismissal in [Dismissal::CancelButton, Dismissal::Escape, Dismissal::OutsideClick] {
        let provider = ConfirmProvider::mount(&Config::default());
        let confirm = provider.handle();
        let mut dialog = provider.presenter();
        let mut terminal = terminal();

        let confirmation = confirm.confirm(ConfirmOptions::new("Leave page?"));
        draw(&mut terminal, &mut dialog);

        let action = match dismissal {
            Dismissal::CancelButton => {
                let (x, y) = center(dialog.button_area(DialogButton::Cancel).unwrap());
                dialog.handle_mouse_events(click(x, y))
            }
            Dismissal::Escape => dialog.handle_key_events(key(KeyCode::Esc)),
            Dismissal::OutsideClick => dialog.handle_mouse_events(click(0, 0)),
        };

        assert_eq!(action, Action::None);
        assert_eq!(resolved(confirmation).await, Some(false));
        assert!(!confirm.is_pending());
        assert!(!dialog.is_visible());
    }
}

#[tokio::test]
async fn test_click_inside_dialog_body_keeps_it_open() {
    let provider = ConfirmProvider::mount(&Config::default());
    let confirm = provider.handle();
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    let _confirmation = confirm.confirm(ConfirmOptions::new("Stay?"));
    draw(&mut terminal, &mut dialog);

    let area = dialog.dialog_area().unwrap();
    dialog.handle_mouse_events(click(area.x + 1, area.y + 1));
    assert!(confirm.is_pending());

    // Only left presses count
    let right_click = MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Right),
        ..click(0, 0)
    };
    dialog.handle_mouse_events(right_click);
    assert!(confirm.is_pending());
}

#[test]
fn test_click_before_first_render_is_ignored() {
    let provider = ConfirmProvider::mount(&Config::default());
    let confirm = provider.handle();
    let mut dialog = provider.presenter();

    let _confirmation = confirm.confirm(ConfirmOptions::new("Not drawn yet"));
    dialog.handle_mouse_events(click(0, 0));

    assert!(confirm.is_pending());
}

#[tokio::test]
async fn test_keyboard_focus_and_activation() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let confirm = provider.handle();

    let confirmation = confirm.confirm(ConfirmOptions::new("Save changes?"));
    assert_eq!(dialog.focused(), Some(DialogButton::Confirm));

    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.focused(), Some(DialogButton::Cancel));
    dialog.handle_key_events(key(KeyCode::Right));
    assert_eq!(dialog.focused(), Some(DialogButton::Confirm));

    dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(resolved(confirmation).await, Some(true));
    assert_eq!(dialog.focused(), None);
}

#[tokio::test]
async fn test_destructive_request_focuses_cancel() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();

    let confirmation = provider.handle().confirm(ConfirmOptions::new("Wipe disk?").destructive());
    assert_eq!(dialog.focused(), Some(DialogButton::Cancel));

    dialog.handle_key_events(key(KeyCode::Enter));
    assert_eq!(resolved(confirmation).await, Some(false));
}

#[tokio::test]
async fn test_shortcut_keys() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();
    let confirm = provider.handle();

    let yes = confirm.confirm(ConfirmOptions::new("First?"));
    dialog.handle_key_events(key(KeyCode::Char('y')));
    assert_eq!(resolved(yes).await, Some(true));

    let no = confirm.confirm(ConfirmOptions::new("Second?"));
    dialog.handle_key_events(key(KeyCode::Char('x')));
    assert!(confirm.is_pending());
    dialog.handle_key_events(key(KeyCode::Char('n')));
    assert_eq!(resolved(no).await, Some(false));
}

#[test]
fn test_keys_ignored_when_idle() {
    let provider = ConfirmProvider::mount(&Config::default());
    let mut dialog = provider.presenter();

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::None);
    assert_eq!(dialog.handle_mouse_events(click(0, 0)), Action::None);
    assert!(!provider.handle().is_pending());
}

#[tokio::test]
async fn test_queued_request_replaces_dialog_with_fresh_focus() {
    let mut config = Config::default();
    config.confirm.conflict_policy = ConflictPolicy::Queue;
    let provider = ConfirmProvider::mount(&config);
    let mut dialog = provider.presenter();
    let mut terminal = terminal();
    let confirm = provider.handle();

    let first = confirm.confirm(ConfirmOptions::new("First?"));
    let second = confirm.confirm(ConfirmOptions::new("Second?"));
    draw(&mut terminal, &mut dialog);

    // Move focus away, then answer the first request
    dialog.handle_key_events(key(KeyCode::Tab));
    dialog.handle_key_events(key(KeyCode::Char('y')));
    assert_eq!(resolved(first).await, Some(true));

    draw(&mut terminal, &mut dialog);
    assert!(find_text(terminal.backend().buffer(), "Second?").is_some());
    assert_eq!(dialog.focused(), Some(DialogButton::Confirm));

    dialog.handle_key_events(key(KeyCode::Esc));
    assert_eq!(resolved(second).await, Some(false));
}

#[test]
fn test_layout_fits_inside_small_terminal() {
    let provider = ConfirmProvider::mount(&Config::default());
    let dialog = provider.presenter();
    let _confirmation = provider.handle().confirm(
        ConfirmOptions::new("Delete?").description("A rather long description that has to wrap over several lines"),
    );

    let area = Rect::new(0, 0, 40, 8);
    let layout = dialog.layout(area, &dialog.current().unwrap());

    assert!(layout.dialog.height <= area.height);
    assert_eq!(layout.dialog.intersection(area), layout.dialog);
    assert!(layout.cancel.right() <= layout.confirm.left());
}

#[tokio::test]
async fn test_click_on_next_request_before_it_is_drawn_is_ignored() {
    let mut config = Config::default();
    config.confirm.conflict_policy = ConflictPolicy::Queue;
    let provider = ConfirmProvider::mount(&config);
    let confirm = provider.handle();
    let mut dialog = provider.presenter();
    let mut terminal = terminal();

    let first = confirm.confirm(ConfirmOptions::new("First"));
    draw(&mut terminal, &mut dialog);
    dialog.handle_key_events(key(KeyCode::Char('y')));
    assert_eq!(resolved(first).await, Some(true));

    // A stale frame from "First" must not be used to answer "Never drawn"
    let second = confirm.confirm(ConfirmOptions::new("Never drawn"));
    assert_eq!(dialog.handle_mouse_events(click(0, 0)), Action::None);
    assert!(confirm.is_pending());
    assert_eq!(dialog.dialog_area(), None);

    // Same when the next request was already queued behind the answered one
    let third = confirm.confirm(ConfirmOptions::new("Queued"));
    draw(&mut terminal, &mut dialog);
    dialog.handle_key_events(key(KeyCode::Char('n')));
    assert_eq!(resolved(second).await, Some(false));
    dialog.handle_mouse_events(click(0, 0));
    assert_eq!(confirm.pending().map(|p| p.title), Some("Queued".to_string()));

    // Once drawn, an outside click cancels it as usual
    draw(&mut terminal, &mut dialog);
    dialog.handle_mouse_events(click(0, 0));
    assert_eq!(resolved(third).await, Some(false));
}

#[test]
fn test_description_height_fits_wrapped_text() {
    let provider = ConfirmProvider::mount(&Config::default());
    let dialog = provider.presenter();

    let _confirmation = provider
        .handle()
        .confirm(ConfirmOptions::new("Wrap?").description("x".repeat(100)));
    let pending = provider.handle().pending().unwrap();

    for width in 30..=121 {
        let layout = dialog.layout(Rect::new(0, 0, width, 40), &pending);
        let inner_width = usize::from(layout.dialog.width - 2);
        let needed = 100usize.div_ceil(inner_width);
        assert!(
            usize::from(layout.description.height) >= needed,
            "width {}: {} line(s) reserved for {} wrapped line(s)",
            width,
            layout.description.height,
            needed
        );
    }
}
