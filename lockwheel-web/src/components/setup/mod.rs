pub mod lock_form;
pub mod setup_screen;

pub use lock_form::LockForm;
pub use setup_screen::SetupScreen;
