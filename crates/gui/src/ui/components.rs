use crate::app::Message;
use crate::utils::display;
use iced::widget::{button, row, text, Row};
use stirling_dock_core::status::{ContainerState, Controls};

pub fn action_buttons(controls: &Controls) -> Row<'static, Message> {
    row![
        button(text("Run Stirling PDF").size(16))
            .padding(10)
            .style(button::success)
            .on_press_maybe(controls.start.then_some(Message::StartPressed)),
        button(text("Stop Stirling PDF").size(16))
            .padding(10)
            .style(button::danger)
            .on_press_maybe(controls.stop.then_some(Message::StopPressed)),
        button(text("Open in Browser").size(16))
            .padding(10)
            .style(button::primary)
            .on_press_maybe(controls.open.then_some(Message::OpenPressed)),
    ]
    .spacing(10)
}

pub fn status_row(state: ContainerState) -> Row<'static, Message> {
    row![
        text("Status:").size(14),
        text("●").size(16).color(display::state_color(state)),
        text(state.label()).size(14),
    ]
    .spacing(5)
}
