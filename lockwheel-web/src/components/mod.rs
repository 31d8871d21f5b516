pub mod modal;
pub mod play;
pub mod setup;
