/*
[INPUT]:  Public API exports for the rosterdesk-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod accounts;
pub mod config;
pub mod import;
pub mod notify;
pub mod tui;

// Re-export main types for convenience
pub use accounts::AccountsScreen;
pub use config::ConsoleConfig;
pub use import::ImportWizard;
