pub mod admin_modal;
pub mod lock_panel;
pub mod play_screen;
pub mod result_screen;
pub mod timer_display;
pub mod wheel;

pub use admin_modal::AdminModal;
pub use lock_panel::LockPanel;
pub use play_screen::PlayScreen;
pub use result_screen::ResultScreen;
pub use timer_display::TimerDisplay;
pub use wheel::Wheel;
