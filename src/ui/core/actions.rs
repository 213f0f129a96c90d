use crate::confirm::ConfirmOptions;

/// The showcase page currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowcasePage {
    #[default]
    Components,
    DesignSystem,
}

impl ShowcasePage {
    pub const ALL: [ShowcasePage; 2] = [ShowcasePage::Components, ShowcasePage::DesignSystem];

    pub fn title(self) -> &'static str {
        match self {
            ShowcasePage::Components => "Components",
            ShowcasePage::DesignSystem => "Design System",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ShowcasePage::Components => 0,
            ShowcasePage::DesignSystem => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ShowcasePage::Components => ShowcasePage::DesignSystem,
            ShowcasePage::DesignSystem => ShowcasePage::Components,
        }
    }
}

/// Work that only happens once the user confirms it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOperation {
    DeleteItem(String),
    ResetTokens,
    ConflictDemo(u8),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SwitchPage(ShowcasePage),
    NextPage,
    SelectNext,
    SelectPrevious,

    // Showcase state
    IncrementTokens,

    // Confirmation flow
    RequestConfirmation {
        options: ConfirmOptions,
        operation: PendingOperation,
    },
    ConfirmationResolved {
        operation: PendingOperation,
        confirmed: bool,
    },
    ConflictDemo,

    // UI operations
    ToggleLogs,

    // App control
    Quit,
    None,
}
