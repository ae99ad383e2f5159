use crate::app::{Message, StirlingDock};
use crate::ui::components;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

pub fn main_view(app: &StirlingDock) -> Element<Message> {
    let controls = app.controls();

    let log_text = text(app.log.join("\n")).size(14);

    let content = Column::new()
        .spacing(10)
        .padding(10)
        .push(components::action_buttons(&controls))
        .push(components::status_row(app.state))
        .push(
            container(scrollable(log_text).width(Length::Fill).height(Length::Fill))
                .padding(10)
                .style(container::bordered_box)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
