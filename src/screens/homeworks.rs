use iced::widget::{button, horizontal_space, row, text, Column, Container, Row, Scrollable};
use iced::{Alignment, Length};
use crate::api::Homework;
use crate::app::{App, Message};
use crate::screens::table::{homework_cells, table_view, HOMEWORK_HEADERS, NO_HOMEWORKS};

fn homework_actions(homework: &Homework) -> Row<'_, Message> {
    // Homeworks are published by teachers; the console can only remove them.
    row![
        button(text("删除").size(14))
            .style(button::danger)
            .on_press(Message::DeleteHomework(homework.clone())),
    ]
}

pub fn homeworks_panel(app: &App) -> Container<Message> {
    let toolbar = row![
        text("作业列表").size(24),
        horizontal_space(),
        button("导出表格").style(button::secondary).on_press(Message::ExportTable),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let table = table_view(&HOMEWORK_HEADERS, &app.homeworks, NO_HOMEWORKS, homework_cells, homework_actions);

    Container::new(
        Column::new()
            .spacing(15)
            .push(toolbar)
            .push(Scrollable::new(table).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(20)
}
