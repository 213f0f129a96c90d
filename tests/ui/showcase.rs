use crate::support::{find_text, key, terminal};
use confirmist::confirm::Variant;
use confirmist::ui::components::ShowcaseComponent;
use confirmist::ui::core::{Action, Component, PendingOperation, ShowcasePage};
use crossterm::event::KeyCode;

#[test]
fn test_page_switching() {
    let mut showcase = ShowcaseComponent::new();
    assert_eq!(showcase.page, ShowcasePage::Components);

    let action = showcase.handle_key_events(key(KeyCode::Char('2')));
    assert_eq!(showcase.update(action), Action::None);
    assert_eq!(showcase.page, ShowcasePage::DesignSystem);

    let action = showcase.handle_key_events(key(KeyCode::Tab));
    showcase.update(action);
    assert_eq!(showcase.page, ShowcasePage::Components);
}

#[test]
fn test_delete_asks_for_destructive_confirmation() {
    let mut showcase = ShowcaseComponent::new();
    let action = showcase.handle_key_events(key(KeyCode::Char('j')));
    showcase.update(action);

    match showcase.handle_key_events(key(KeyCode::Char('d'))) {
        Action::RequestConfirmation { options, operation } => {
            assert_eq!(options.title, "Delete Select?");
            assert_eq!(options.variant, Variant::Destructive);
            assert_eq!(options.confirm_label.as_deref(), Some("Delete"));
            assert_eq!(options.cancel_label.as_deref(), Some("Keep"));
            assert_eq!(operation, PendingOperation::DeleteItem("Select".to_string()));
        }
        other => panic!("expected a confirmation request, got {:?}", other),
    }

    // Nothing changes until the outcome arrives
    assert!(showcase.items.contains(&"Select".to_string()));
}

#[test]
fn test_apply_outcome() {
    let mut showcase = ShowcaseComponent::new();
    let total = showcase.items.len();
    showcase.selected = total - 1;
    let last = showcase.items[total - 1].clone();

    let status = showcase.apply_outcome(&PendingOperation::DeleteItem(last.clone()), false);
    assert!(status.contains("Cancelled"));
    assert_eq!(showcase.items.len(), total);

    let status = showcase.apply_outcome(&PendingOperation::DeleteItem(last.clone()), true);
    assert!(status.contains("Confirmed"));
    assert!(!showcase.items.contains(&last));
    assert_eq!(showcase.selected, total - 2);

    // Deleting something that is already gone is harmless
    showcase.apply_outcome(&PendingOperation::DeleteItem(last), true);
    assert_eq!(showcase.items.len(), total - 1);
}

#[test]
fn test_reset_tokens() {
    let mut showcase = ShowcaseComponent::new();
    showcase.update(Action::SwitchPage(ShowcasePage::DesignSystem));
    for _ in 0..3 {
        let action = showcase.handle_key_events(key(KeyCode::Char('+')));
        showcase.update(action);
    }
    assert_eq!(showcase.applied_tokens, 3);

    let action = showcase.handle_key_events(key(KeyCode::Char('r')));
    assert!(matches!(
        action,
        Action::RequestConfirmation {
            operation: PendingOperation::ResetTokens,
            ..
        }
    ));

    showcase.apply_outcome(&PendingOperation::ResetTokens, true);
    assert_eq!(showcase.applied_tokens, 0);
}

#[test]
fn test_renders_both_pages() {
    let mut showcase = ShowcaseComponent::new();
    let mut terminal = terminal();

    terminal
        .draw(|f| {
            let area = f.area();
            showcase.render(f, area);
        })
        .unwrap();
    assert!(find_text(terminal.backend().buffer(), "1 Components").is_some());
    assert!(find_text(terminal.backend().buffer(), "Combobox").is_some());

    showcase.update(Action::SwitchPage(ShowcasePage::DesignSystem));
    terminal
        .draw(|f| {
            let area = f.area();
            showcase.render(f, area);
        })
        .unwrap();
    assert!(find_text(terminal.backend().buffer(), "Customised tokens: 0").is_some());
}
