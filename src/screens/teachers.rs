use iced::widget::{button, horizontal_space, row, text, Column, Container, Row, Scrollable};
use iced::{Alignment, Length};
use crate::api::Teacher;
use crate::app::{App, Message};
use crate::screens::table::{table_view, teacher_cells, NO_TEACHERS, TEACHER_HEADERS};

fn teacher_actions(teacher: &Teacher) -> Row<'_, Message> {
    row![
        button(text("编辑").size(14))
            .style(button::secondary)
            .on_press(Message::StartEditingTeacher(teacher.clone())),
        button(text("删除").size(14))
            .style(button::danger)
            .on_press(Message::DeleteTeacher(teacher.clone())),
    ]
    .spacing(8)
}

pub fn teachers_panel(app: &App) -> Container<Message> {
    let toolbar = row![
        text("教师列表").size(24),
        horizontal_space(),
        button("导出表格").style(button::secondary).on_press(Message::ExportTable),
        button("添加教师").on_press(Message::ShowAddTeacher),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let table = table_view(&TEACHER_HEADERS, &app.teachers, NO_TEACHERS, teacher_cells, teacher_actions);

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
