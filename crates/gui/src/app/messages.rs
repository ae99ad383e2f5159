use stirling_dock_core::actions::ActionOutcome;
use stirling_dock_core::status::ContainerState;

#[derive(Debug, Clone)]
pub enum Message {
    StartPressed,
    StopPressed,
    OpenPressed,
    PollTick,
    PollFinished(ContainerState),
    StartFinished(ActionOutcome),
    StopFinished(ActionOutcome),
    BrowserOpened(Result<(), String>),
}
