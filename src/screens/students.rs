use iced::widget::{button, horizontal_space, row, text, Column, Container, Row, Scrollable};
use iced::{Alignment, Length};
use crate::api::Student;
use crate::app::{App, Message};
use crate::screens::table::{student_cells, table_view, NO_STUDENTS, STUDENT_HEADERS};

fn student_actions(student: &Student) -> Row<'_, Message> {
    row![
        button(text("编辑").size(14))
            .style(button::secondary)
            .on_press(Message::StartEditingStudent(student.clone())),
        button(text("删除").size(14))
            .style(button::danger)
            .on_press(Message::DeleteStudent(student.clone())),
    ]
    .spacing(8)
}

pub fn students_panel(app: &App) -> Container<Message> {
    let toolbar = row![
        text("学生列表").size(24),
        horizontal_space(),
        button("导出表格").style(button::secondary).on_press(Message::ExportTable),
        button("导入学生").style(button::success).on_press(Message::ShowImportStudents),
        button("添加学生").on_press(Message::ShowAddStudent),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let table = table_view(&STUDENT_HEADERS, &app.students, NO_STUDENTS, student_cells, student_actions);

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
