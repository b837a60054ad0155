//! Table rendering shared by the three list panels; the cell functions
//! also feed the spreadsheet export.

use iced::widget::container::bordered_box;
use iced::widget::{text, Column, Container, Row};
use iced::{Alignment, Color, Element, Length};
use crate::api::{Homework, Student, Teacher};
use crate::app::Message;

pub const TEACHER_HEADERS: [&str; 5] = ["用户名", "学科", "作业数", "AI批改", "创建时间"];
pub const STUDENT_HEADERS: [&str; 4] = ["姓名", "学号", "提交次数", "创建时间"];
pub const HOMEWORK_HEADERS: [&str; 5] = ["标题", "学科", "教师", "创建时间", "提交情况"];

pub const NO_TEACHERS: &str = "暂无教师";
pub const NO_STUDENTS: &str = "暂无学生";
pub const NO_HOMEWORKS: &str = "暂无作业";

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow<'a, T> {
    Placeholder(&'static str),
    Record(&'a T),
}

/// One row per record, or a single placeholder row when there are none.
pub fn table_rows<'a, T>(records: &'a [T], placeholder: &'static str) -> Vec<TableRow<'a, T>> {
    if records.is_empty() {
        vec![TableRow::Placeholder(placeholder)]
    } else {
        records.iter().map(TableRow::Record).collect()
    }
}

pub fn teacher_cells(teacher: &Teacher) -> Vec<String> {
    vec![
        teacher.username.clone(),
        teacher.subject.clone(),
        teacher.homework_count.to_string(),
        if teacher.enable_ai_review { "✓ 已启用" } else { "✗ 已禁用" }.to_string(),
        teacher.created_at.clone(),
    ]
}

pub fn student_cells(student: &Student) -> Vec<String> {
    vec![
        student.name.clone(),
        student.student_id.clone(),
        student.submission_count.to_string(),
        student.created_at.clone(),
    ]
}

pub fn homework_cells(homework: &Homework) -> Vec<String> {
    vec![
        homework.title.clone(),
        homework.subject.clone(),
        homework.teacher_name.clone(),
        homework.created_at.clone(),
        format!("{} / {}", homework.submitted_count, homework.total_students),
    ]
}

fn header_row<'a>(headers: &[&'static str]) -> Element<'a, Message> {
    let mut line = Row::new().spacing(10).align_y(Alignment::Center);
    for header in headers.iter().chain(std::iter::once(&"操作")) {
        line = line.push(Container::new(text(*header).size(16)).width(Length::FillPortion(2)));
    }
    Container::new(line).padding(8).width(Length::Fill).into()
}

fn record_row<'a>(cells: Vec<String>, actions: Row<'a, Message>) -> Element<'a, Message> {
    let mut line = Row::new().spacing(10).align_y(Alignment::Center);
    for cell in cells {
        line = line.push(Container::new(text(cell)).width(Length::FillPortion(2)));
    }
    line = line.push(Container::new(actions).width(Length::FillPortion(2)));
    Container::new(line)
        .padding(8)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

fn placeholder_row<'a>(placeholder: &'static str) -> Element<'a, Message> {
    Container::new(text(placeholder).color(Color::from_rgb8(0x99, 0x99, 0x99)))
        .padding(12)
        .center_x(Length::Fill)
        .style(bordered_box)
        .into()
}

/// Header plus rows; `actions` builds the buttons of the last column.
pub fn table_view<'a, T>(
    headers: &[&'static str],
    records: &'a [T],
    placeholder: &'static str,
    cells: impl Fn(&T) -> Vec<String>,
    actions: impl Fn(&'a T) -> Row<'a, Message>,
) -> Column<'a, Message> {
    let mut table = Column::new().spacing(6).push(header_row(headers));
    for row in table_rows(records, placeholder) {
        table = table.push(match row {
            TableRow::Placeholder(label) => placeholder_row(label),
            TableRow::Record(record) => record_row(cells(record), actions(record)),
        });
    }
    table
}
