pub mod player;
pub mod sidebar;
pub mod watch;
