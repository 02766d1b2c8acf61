pub mod notifier;
pub mod prompt;

pub use notifier::{LogNotifier, NoticeLevel, Notifier};

pub use prompt::{AutoConfirm, ConfirmationPrompt};
