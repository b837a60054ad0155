use iced::widget::container::{background, bordered_box};
use iced::widget::{button, column, horizontal_space, mouse_area, row, text, text_input, Column, Container, Stack};
use iced::{Color, Element, Length};
use crate::api::{StagedFile, StudentForm, TeacherForm};
use crate::app::state::ImportDialog;
use crate::app::{App, Message};

/// Puts `modal` on a dimmed layer above `base`; clicks outside the modal are swallowed.
fn overlay<'a>(base: Element<'a, Message>, modal: Column<'a, Message>, width: f32) -> Element<'a, Message> {
    let modal = Container::new(modal)
        .style(bordered_box)
        .padding(20)
        .width(Length::Fixed(width));

    let modal_overlay = Container::new(
        mouse_area(Container::new(modal).center(Length::Fill).padding(40))
            .on_press(Message::NoOp)
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }));

    Stack::new().push(base).push(modal_overlay).into()
}

fn dialog_buttons<'a>(cancel: Message, confirm_label: &'a str, confirm: Message) -> Element<'a, Message> {
    row![
        horizontal_space(),
        button("取消").style(button::secondary).on_press(cancel),
        button(confirm_label).on_press(confirm),
    ]
        .spacing(10)
        .into()
}

fn add_teacher_modal(form: &TeacherForm) -> Column<Message> {
    column![
        text("添加教师").size(24),
        text_input("用户名", &form.username)
            .on_input(Message::NewTeacherUsernameChanged),
        text_input("密码（至少6位）", &form.password)
            .on_input(Message::NewTeacherPasswordChanged)
            .secure(true),
        text_input("学科", &form.subject)
            .on_input(Message::NewTeacherSubjectChanged)
            .on_submit(Message::SubmitNewTeacher),
        dialog_buttons(Message::CloseAddTeacher, "添加", Message::SubmitNewTeacher),
    ]
        .spacing(10)
}

fn edit_teacher_modal(form: &TeacherForm) -> Column<Message> {
    column![
        text("编辑教师").size(24),
        text_input("用户名", &form.username)
            .on_input(Message::EditTeacherUsernameChanged),
        text_input("新密码（留空则不修改）", &form.password)
            .on_input(Message::EditTeacherPasswordChanged)
            .secure(true),
        text_input("学科", &form.subject)
            .on_input(Message::EditTeacherSubjectChanged)
            .on_submit(Message::SubmitEditedTeacher),
        dialog_buttons(Message::CancelEditingTeacher, "保存", Message::SubmitEditedTeacher),
    ]
        .spacing(10)
}

fn add_student_modal(form: &StudentForm) -> Column<Message> {
    column![
        text("添加学生").size(24),
        text_input("姓名", &form.name)
            .on_input(Message::NewStudentNameChanged),
        text_input("学号", &form.student_id)
            .on_input(Message::NewStudentIdChanged)
            .on_submit(Message::SubmitNewStudent),
        dialog_buttons(Message::CloseAddStudent, "添加", Message::SubmitNewStudent),
    ]
        .spacing(10)
}

fn edit_student_modal(form: &StudentForm) -> Column<Message> {
    column![
        text("编辑学生").size(24),
        text_input("姓名", &form.name)
            .on_input(Message::EditStudentNameChanged),
        text_input("学号", &form.student_id)
            .on_input(Message::EditStudentIdChanged)
            .on_submit(Message::SubmitEditedStudent),
        dialog_buttons(Message::CancelEditingStudent, "保存", Message::SubmitEditedStudent),
    ]
        .spacing(10)
}

fn file_info(file: &StagedFile) -> Column<Message> {
    let rows = match file.rows {
        Some(rows) => format!("可导入行数: {}", rows),
        None => "可导入行数: 未知".to_string(),
    };
    column![
        text("已选择文件:").size(16),
        text(&file.name),
        text(format!("大小: {}", file.size_kb())).size(12),
        text(rows).size(12),
    ]
        .spacing(4)
}

fn import_modal(dialog: &ImportDialog) -> Column<Message> {
    let mut content = column![
        text("导入学生").size(24),
        text("Excel 文件（.xlsx / .xls）：第一行为表头，第一列姓名，第二列学号。已存在的学号会被跳过。").size(14),
        row![
            button("选择文件").on_press(Message::ChooseImportFile),
            button("下载模板").style(button::secondary).on_press(Message::SaveImportTemplate),
        ]
            .spacing(10),
    ]
        .spacing(12);

    if let Some(file) = &dialog.staged {
        content = content.push(Container::new(file_info(file)).padding(10).width(Length::Fill).style(bordered_box));
    }

    content.push(
        row![
            horizontal_space(),
            button("取消").style(button::secondary).on_press(Message::CloseImportStudents),
            button(dialog.upload_label())
                .style(button::success)
                .on_press_maybe(dialog.can_upload().then_some(Message::UploadImport)),
        ]
            .spacing(10),
    )
}

/// Layers every open dialog over `base`. Confirmations sit above forms and
/// notices above everything.
pub fn with_dialogs<'a>(app: &'a App, base: Element<'a, Message>) -> Element<'a, Message> {
    let mut ui = base;

    if let Some(form) = &app.add_teacher_dialog {
        ui = overlay(ui, add_teacher_modal(form), 420.0);
    }
    if let Some(dialog) = &app.edit_teacher_dialog {
        ui = overlay(ui, edit_teacher_modal(&dialog.form), 420.0);
    }
    if let Some(form) = &app.add_student_dialog {
        ui = overlay(ui, add_student_modal(form), 420.0);
    }
    if let Some(dialog) = &app.edit_student_dialog {
        ui = overlay(ui, edit_student_modal(&dialog.form), 420.0);
    }
    if let Some(dialog) = &app.import_dialog {
        ui = overlay(ui, import_modal(dialog), 520.0);
    }

    if let Some(confirmation) = &app.pending_confirmation {
        let modal = column![
            text("确认").size(24),
            text(confirmation.prompt()),
            dialog_buttons(Message::ConfirmDeclined, "确定", Message::ConfirmAccepted),
        ]
            .spacing(15);
        ui = overlay(ui, modal, 460.0);
    }

    if let Some(notice) = &app.notice {
        let modal = column![
            text(notice),
            row![horizontal_space(), button("确定").on_press(Message::DismissNotice)],
        ]
            .spacing(15);
        ui = overlay(ui, modal, 460.0);
    }

    ui
}
