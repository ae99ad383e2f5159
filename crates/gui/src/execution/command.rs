//! Async wrappers handing core calls to `Task::perform`.
//!
//! The Docker invocation itself is a blocking wait on the child process; it
//! runs inside the background task spawned for the action, so the UI loop
//! never blocks on it.

use stirling_dock_core::actions::{self, ActionOutcome};
use stirling_dock_core::docker::{ContainerRef, SystemRunner};
use stirling_dock_core::status::{self, ContainerState};

pub async fn start_container(container: ContainerRef) -> ActionOutcome {
    actions::start_container(&SystemRunner, &container)
}

pub async fn stop_container(container: ContainerRef) -> ActionOutcome {
    actions::stop_container(&SystemRunner, &container)
}

pub async fn poll_status(container: ContainerRef) -> ContainerState {
    status::poll_state(&SystemRunner, &container)
}
