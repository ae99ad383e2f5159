use crate::app::StirlingDock;

mod app;
mod execution;
mod ui;
mod utils;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(StirlingDock::title, StirlingDock::update, StirlingDock::view)
        .subscription(StirlingDock::subscription)
        .window_size((600.0, 460.0))
        .centered()
        .run_with(StirlingDock::new)
}
