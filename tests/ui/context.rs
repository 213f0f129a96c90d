use confirmist::config::Config;
use confirmist::confirm::{ConfirmError, ConfirmOptions};
use confirmist::logger::Logger;
use confirmist::ui::core::{AppContext, ConfirmProvider};
use std::time::Duration;

#[test]
#[should_panic(expected = "use_confirm must be called within a mounted ConfirmProvider")]
fn test_use_confirm_without_provider_panics() {
    let context = AppContext::new(Logger::new());
    let _ = context.use_confirm();
}

#[test]
fn test_try_use_confirm_without_provider() {
    let context = AppContext::new(Logger::new());
    assert!(matches!(context.try_use_confirm(), Err(ConfirmError::ProviderNotMounted)));
}

#[test]
fn test_mounted_provider_is_shared() {
    let context = AppContext::new(Logger::new()).with_provider(ConfirmProvider::mount(&Config::default()));

    let caller = context.use_confirm();
    let presenter_side = context.use_confirm();

    let _confirmation = caller.confirm(ConfirmOptions::new("Shared?"));
    assert_eq!(presenter_side.pending().map(|p| p.title), Some("Shared?".to_string()));
}

#[tokio::test]
async fn test_unmount_while_pending_leaves_caller_waiting() {
    let mut context = AppContext::new(Logger::new()).with_provider(ConfirmProvider::mount(&Config::default()));
    let confirm = context.use_confirm();

    let confirmation = confirm.confirm(ConfirmOptions::new("Still there?"));
    assert!(context.unmount().is_some());

    assert!(tokio::time::timeout(Duration::from_millis(50), confirmation).await.is_err());
    assert!(matches!(confirm.try_answer(true), Err(ConfirmError::ProviderNotMounted)));
    assert!(context.try_use_confirm().is_err());
}
