mod browser;
mod command;

pub use browser::open_in_browser;
pub use command::{poll_status, start_container, stop_container};
