mod messages;
mod state;

pub use messages::Message;
pub use state::StirlingDock;
