//! Container state polling and control derivation.

use crate::docker::{container_exists, container_running, CommandRunner, ContainerRef};

/// Observed state of the managed container, recomputed on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// Container exists and is currently executing
    Running,
    /// Container exists but is not executing
    Stopped,
    /// No container with the managed name has been created
    Absent,
}

impl ContainerState {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Stopped => "Stopped",
            Self::Absent => "Not created",
        }
    }

    /// Which controls are available in this state.
    pub fn controls(self) -> Controls {
        match self {
            Self::Running => Controls {
                start: false,
                stop: true,
                open: true,
            },
            Self::Stopped | Self::Absent => Controls {
                start: true,
                stop: false,
                open: false,
            },
        }
    }
}

/// Enablement of the three user controls, a pure function of
/// [`ContainerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub open: bool,
}

/// Computes the current container state from the existence and running
/// queries.
///
/// A failure of either query reads as [`ContainerState::Absent`]: "don't
/// know" keeps the start control available rather than surfacing a distinct
/// error state.
pub fn poll_state(runner: &impl CommandRunner, container: &ContainerRef) -> ContainerState {
    match container_exists(runner, container) {
        Ok(true) => match container_running(runner, container) {
            Ok(true) => ContainerState::Running,
            Ok(false) => ContainerState::Stopped,
            Err(_) => ContainerState::Absent,
        },
        Ok(false) | Err(_) => ContainerState::Absent,
    }
}
