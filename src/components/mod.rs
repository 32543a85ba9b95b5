//! UI Components
//!
//! Screens and the reusable pieces they are built from.

mod change_password_form;
mod delete_confirm_button;
mod entry_table;
mod error_banner;
mod filter_cards;
mod food_entry_form;
mod language_selector;
mod log_panel;
mod login_screen;
mod main_screen;
mod signup_screen;
mod theme_toggle;
mod user_management;

pub use change_password_form::ChangePasswordForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entry_table::EntryTable;
pub use error_banner::ErrorBanner;
pub use filter_cards::FilterCards;
pub use food_entry_form::FoodEntryForm;
pub use language_selector::LanguageSelector;
pub use log_panel::LogPanel;
pub use login_screen::LoginScreen;
pub use main_screen::MainScreen;
pub use signup_screen::SignupScreen;
pub use theme_toggle::ThemeToggle;
pub use user_management::UserManagement;
