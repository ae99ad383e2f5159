use iced::Color;
use stirling_dock_core::status::ContainerState;

/// Indicator color for the status dot: green running, red stopped, gray when
/// the container is absent or the state could not be determined.
pub fn state_color(state: ContainerState) -> Color {
    match state {
        ContainerState::Running => Color::from_rgb(0.16, 0.65, 0.27),
        ContainerState::Stopped => Color::from_rgb(0.8, 0.2, 0.2),
        ContainerState::Absent => Color::from_rgb(0.5, 0.5, 0.5),
    }
}
