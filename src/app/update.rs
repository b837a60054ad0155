use std::convert::identity;
use std::path::PathBuf;
use iced::Task;
use log::{debug, info, warn};
use tokio::task::spawn_blocking;
use crate::api::{Credentials, HttpAdminApi, StagedFile, StudentForm, TeacherForm};
use crate::app::requests::{execute, Request};
use crate::app::state::{Confirmation, EditDialog, ImportDialog, Screen, Tab};
use crate::config::{save_config, theme_from_str, theme_to_str};
use crate::screens::table::{
    homework_cells, student_cells, teacher_cells, HOMEWORK_HEADERS, STUDENT_HEADERS, TEACHER_HEADERS,
};
use crate::workbook;
use super::{App, Message};

const EMPTY_CREDENTIALS: &str = "用户名和密码不能为空";
const NO_FILE_SELECTED: &str = "请先选择文件";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseImportFile => return Task::perform(pick_import_file(), Message::ImportFileChosen),
            Message::SaveImportTemplate => return Task::perform(save_import_template(), Message::TemplateSaved),
            Message::ExportTable => return self.export_active_tab(),
            _ => {}
        }

        let persist = matches!(message, Message::LoggedIn(Ok(_)) | Message::ThemeSelected(_));
        let requests = self.reduce(message);
        if persist {
            if let Err(err) = save_config(&self.config) {
                warn!("could not save settings: {}", err);
            }
        }

        let tasks: Vec<Task<Message>> = requests.into_iter().map(|request| self.dispatch(request)).collect();
        Task::batch(tasks)
    }

    fn dispatch(&self, request: Request) -> Task<Message> {
        debug!("dispatching {:?}", request);
        Task::perform(execute(self.api.clone(), request), identity)
    }

    /// Applies `message` to the state and returns the backend calls it triggers.
    pub fn reduce(&mut self, message: Message) -> Vec<Request> {
        match message {
            Message::ServerUrlChanged(v) => {
                self.server_url = v;
                vec![]
            }
            Message::UsernameChanged(v) => {
                self.login_username = v;
                vec![]
            }
            Message::PasswordChanged(v) => {
                self.login_password = v;
                vec![]
            }
            Message::LoginPressed => {
                let username = self.login_username.trim().to_string();
                if username.is_empty() || self.login_password.is_empty() {
                    self.login_error = Some(EMPTY_CREDENTIALS.to_string());
                    return vec![];
                }
                if self.server_url.trim().trim_end_matches('/') != self.api.base_url() {
                    match HttpAdminApi::new(&self.server_url) {
                        Ok(api) => self.api = api,
                        Err(err) => {
                            self.login_error = Some(format!("无法连接服务器: {}", err));
                            return vec![];
                        }
                    }
                }
                self.login_error = None;
                vec![Request::Login(Credentials {
                    username,
                    password: self.login_password.clone(),
                })]
            }
            Message::LoggedIn(result) => match result {
                Ok(_) => {
                    info!("signed in to {}", self.api.base_url());
                    self.login_password.clear();
                    self.login_error = None;
                    self.config.server_url = self.api.base_url().to_string();
                    self.config.username = Some(self.login_username.trim().to_string());
                    self.current_screen = Screen::Console;
                    self.active_tab = Tab::Teachers;
                    vec![Request::CurrentAdmin, Request::LoadStats, Request::LoadTeachers]
                }
                Err(e) => {
                    self.login_error = Some(e);
                    vec![]
                }
            },
            Message::AdminInfoLoaded(result) => {
                match result {
                    Ok(name) => self.admin_name = Some(name),
                    Err(e) => warn!("could not load admin info: {}", e),
                }
                vec![]
            }
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                self.current_screen = Screen::Console;
                vec![tab.load_request()]
            }
            Message::GoToConsole => {
                self.current_screen = Screen::Console;
                vec![self.active_tab.load_request()]
            }
            Message::GoToSettings => {
                self.current_screen = Screen::Settings;
                vec![]
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    self.config.theme_name = theme_to_str(&theme).to_string();
                    self.theme = theme;
                }
                vec![]
            }
            Message::Logout => {
                self.pending_confirmation = Some(Confirmation::Logout);
                vec![]
            }
            Message::LoggedOut => {
                self.end_session();
                vec![]
            }
            Message::StatsLoaded(result) => {
                // Counters only move when every list came back.
                match result {
                    Ok(stats) => {
                        debug!("dashboard counts: {}", stats);
                        self.stats = Some(stats);
                    }
                    Err(e) => warn!("dashboard counts left unchanged: {}", e),
                }
                vec![]
            }
            Message::TeachersLoaded(result) => {
                match result {
                    Ok(teachers) => self.teachers = teachers,
                    Err(e) => self.notice = Some(e),
                }
                vec![]
            }
            Message::StudentsLoaded(result) => {
                match result {
                    Ok(students) => self.students = students,
                    Err(e) => self.notice = Some(e),
                }
                vec![]
            }
            Message::HomeworksLoaded(result) => {
                match result {
                    Ok(homeworks) => self.homeworks = homeworks,
                    Err(e) => self.notice = Some(e),
                }
                vec![]
            }
            // Teachers
            Message::ShowAddTeacher => {
                self.add_teacher_dialog = Some(TeacherForm::default());
                vec![]
            }
            Message::CloseAddTeacher => {
                self.add_teacher_dialog = None;
                vec![]
            }
            Message::NewTeacherUsernameChanged(v) => {
                if let Some(form) = &mut self.add_teacher_dialog {
                    form.username = v;
                }
                vec![]
            }
            Message::NewTeacherPasswordChanged(v) => {
                if let Some(form) = &mut self.add_teacher_dialog {
                    form.password = v;
                }
                vec![]
            }
            Message::NewTeacherSubjectChanged(v) => {
                if let Some(form) = &mut self.add_teacher_dialog {
                    form.subject = v;
                }
                vec![]
            }
            Message::SubmitNewTeacher => match &self.add_teacher_dialog {
                Some(form) => vec![Request::AddTeacher(form.clone())],
                None => vec![],
            },
            Message::TeacherAdded(result) => match result {
                Ok(message) => {
                    self.notice = Some(message);
                    self.add_teacher_dialog = None;
                    vec![Request::LoadTeachers, Request::LoadStats]
                }
                Err(e) => {
                    self.notice = Some(e);
                    vec![]
                }
            },
            Message::StartEditingTeacher(teacher) => {
                self.edit_teacher_dialog = Some(EditDialog {
                    id: teacher.id,
                    form: TeacherForm {
                        username: teacher.username,
                        password: String::new(),
                        subject: teacher.subject,
                    },
                });
                vec![]
            }
            Message::CancelEditingTeacher => {
                self.edit_teacher_dialog = None;
                vec![]
            }
            Message::EditTeacherUsernameChanged(v) => {
                if let Some(dialog) = &mut self.edit_teacher_dialog {
                    dialog.form.username = v;
                }
                vec![]
            }
            Message::EditTeacherPasswordChanged(v) => {
                if let Some(dialog) = &mut self.edit_teacher_dialog {
                    dialog.form.password = v;
                }
                vec![]
            }
            Message::EditTeacherSubjectChanged(v) => {
                if let Some(dialog) = &mut self.edit_teacher_dialog {
                    dialog.form.subject = v;
                }
                vec![]
            }
            Message::SubmitEditedTeacher => match &self.edit_teacher_dialog {
                Some(dialog) => vec![Request::EditTeacher(dialog.id, dialog.form.clone())],
                None => vec![],
            },
            Message::TeacherEdited(result) => match result {
                Ok(message) => {
                    self.notice = Some(message);
                    self.edit_teacher_dialog = None;
                    vec![Request::LoadTeachers]
                }
                Err(e) => {
                    self.notice = Some(e);
                    vec![]
                }
            },
            Message::DeleteTeacher(teacher) => {
                self.pending_confirmation = Some(Confirmation::DeleteTeacher {
                    id: teacher.id,
                    username: teacher.username,
                });
                vec![]
            }
            Message::TeacherDeleted(result) => self.after_delete(result, Request::LoadTeachers),
            // Students
            Message::ShowAddStudent => {
                self.add_student_dialog = Some(StudentForm::default());
                vec![]
            }
            Message::CloseAddStudent => {
                self.add_student_dialog = None;
                vec![]
            }
            Message::NewStudentNameChanged(v) => {
                if let Some(form) = &mut self.add_student_dialog {
                    form.name = v;
                }
                vec![]
            }
            Message::NewStudentIdChanged(v) => {
                if let Some(form) = &mut self.add_student_dialog {
                    form.student_id = v;
                }
                vec![]
            }
            Message::SubmitNewStudent => match &self.add_student_dialog {
                Some(form) => vec![Request::AddStudent(form.clone())],
                None => vec![],
            },
            Message::StudentAdded(result) => match result {
                Ok(message) => {
                    self.notice = Some(message);
                    self.add_student_dialog = None;
                    vec![Request::LoadStudents, Request::LoadStats]
                }
                Err(e) => {
                    self.notice = Some(e);
                    vec![]
                }
            },
            Message::StartEditingStudent(student) => {
                self.edit_student_dialog = Some(EditDialog {
                    id: student.id,
                    form: StudentForm {
                        name: student.name,
                        student_id: student.student_id,
                    },
                });
                vec![]
            }
            Message::CancelEditingStudent => {
                self.edit_student_dialog = None;
                vec![]
            }
            Message::EditStudentNameChanged(v) => {
                if let Some(dialog) = &mut self.edit_student_dialog {
                    dialog.form.name = v;
                }
                vec![]
            }
            Message::EditStudentIdChanged(v) => {
                if let Some(dialog) = &mut self.edit_student_dialog {
                    dialog.form.student_id = v;
                }
                vec![]
            }
            Message::SubmitEditedStudent => match &self.edit_student_dialog {
                Some(dialog) => vec![Request::EditStudent(dialog.id, dialog.form.clone())],
                None => vec![],
            },
            Message::StudentEdited(result) => match result {
                Ok(message) => {
                    self.notice = Some(message);
                    self.edit_student_dialog = None;
                    vec![Request::LoadStudents]
                }
                Err(e) => {
                    self.notice = Some(e);
                    vec![]
                }
            },
            Message::DeleteStudent(student) => {
                self.pending_confirmation = Some(Confirmation::DeleteStudent {
                    id: student.id,
                    name: student.name,
                });
                vec![]
            }
            Message::StudentDeleted(result) => self.after_delete(result, Request::LoadStudents),
            // Import
            Message::ShowImportStudents => {
                self.import_dialog = Some(ImportDialog::default());
                vec![]
            }
            Message::CloseImportStudents => {
                self.import_dialog = None;
                vec![]
            }
            Message::ImportFileChosen(file) => {
                // A cancelled picker keeps whatever was staged before.
                if let (Some(dialog), Some(file)) = (&mut self.import_dialog, file) {
                    dialog.staged = Some(file);
                }
                vec![]
            }
            Message::UploadImport => {
                let Some(dialog) = &mut self.import_dialog else {
                    return vec![];
                };
                if dialog.uploading {
                    return vec![];
                }
                match dialog.staged.clone() {
                    Some(file) => {
                        dialog.uploading = true;
                        vec![Request::ImportStudents(file)]
                    }
                    None => {
                        self.notice = Some(NO_FILE_SELECTED.to_string());
                        vec![]
                    }
                }
            }
            Message::StudentsImported(result) => {
                if let Some(dialog) = &mut self.import_dialog {
                    dialog.uploading = false;
                }
                match result {
                    Ok(report) => {
                        info!("import finished: {} added, {} skipped", report.added, report.skipped);
                        self.notice = Some(report.summary());
                        self.import_dialog = None;
                        vec![Request::LoadStudents, Request::LoadStats]
                    }
                    Err(e) => {
                        self.notice = Some(e);
                        vec![]
                    }
                }
            }
            Message::TemplateSaved(result) => {
                match result {
                    Ok(Some(path)) => self.notice = Some(format!("模板已保存: {}", path.display())),
                    Ok(None) => {}
                    Err(e) => self.notice = Some(e),
                }
                vec![]
            }
            // Homeworks
            Message::DeleteHomework(homework) => {
                self.pending_confirmation = Some(Confirmation::DeleteHomework {
                    id: homework.id,
                    title: homework.title,
                });
                vec![]
            }
            Message::HomeworkDeleted(result) => self.after_delete(result, Request::LoadHomeworks),
            Message::TableExported(result) => {
                self.notice = Some(match result {
                    Ok(path) => format!("已导出: {}", path.display()),
                    Err(e) => e,
                });
                vec![]
            }
            Message::ConfirmAccepted => match self.pending_confirmation.take() {
                Some(confirmation) => vec![confirmation.into_request()],
                None => vec![],
            },
            Message::ConfirmDeclined => {
                self.pending_confirmation = None;
                vec![]
            }
            Message::DismissNotice => {
                self.notice = None;
                vec![]
            }
            Message::NoOp => vec![],
            // Handled in `update` before reaching the reducer.
            Message::ChooseImportFile | Message::SaveImportTemplate | Message::ExportTable => vec![],
        }
    }

    fn after_delete(&mut self, result: Result<String, String>, reload: Request) -> Vec<Request> {
        match result {
            Ok(message) => {
                self.notice = Some(message);
                vec![reload, Request::LoadStats]
            }
            Err(e) => {
                self.notice = Some(e);
                vec![]
            }
        }
    }

    fn end_session(&mut self) {
        self.current_screen = Screen::Login;
        self.active_tab = Tab::Teachers;
        self.login_password.clear();
        self.admin_name = None;
        self.stats = None;
        self.teachers.clear();
        self.students.clear();
        self.homeworks.clear();
        self.add_teacher_dialog = None;
        self.edit_teacher_dialog = None;
        self.add_student_dialog = None;
        self.edit_student_dialog = None;
        self.import_dialog = None;
        self.pending_confirmation = None;
    }

    fn export_active_tab(&self) -> Task<Message> {
        let tab = self.active_tab;
        let (headers, rows): (Vec<&'static str>, Vec<Vec<String>>) = match tab {
            Tab::Teachers => (TEACHER_HEADERS.to_vec(), self.teachers.iter().map(teacher_cells).collect()),
            Tab::Students => (STUDENT_HEADERS.to_vec(), self.students.iter().map(student_cells).collect()),
            Tab::Homeworks => (HOMEWORK_HEADERS.to_vec(), self.homeworks.iter().map(homework_cells).collect()),
        };

        Task::perform(
            async move {
                spawn_blocking(move || {
                    workbook::export_table(tab.export_stem(), &headers, &rows)
                        .map_err(|err| format!("导出失败: {}", err))
                })
                .await
                .unwrap_or_else(|join_err| Err(format!("导出失败: {:?}", join_err)))
            },
            Message::TableExported,
        )
    }
}

async fn pick_import_file() -> Option<StagedFile> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("选择学生名单")
        .add_filter("Excel", &["xlsx", "xls"])
        .pick_file()
        .await?;
    let path = handle.path().to_path_buf();
    let name = handle.file_name();

    spawn_blocking(move || {
        let size = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or_default();
        let rows = if name.to_lowercase().ends_with(".xlsx") {
            workbook::count_import_rows(&path)
                .map_err(|err| warn!("could not preview {}: {}", path.display(), err))
                .ok()
        } else {
            None
        };
        StagedFile { path, name, size, rows }
    })
    .await
    .map_err(|join_err| warn!("staging the import file failed: {:?}", join_err))
    .ok()
}

async fn save_import_template() -> Result<Option<PathBuf>, String> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("保存导入模板")
        .set_file_name("学生导入模板.xlsx")
        .add_filter("Excel", &["xlsx"])
        .save_file()
        .await
    else {
        return Ok(None);
    };
    let path = handle.path().to_path_buf();

    spawn_blocking(move || {
        workbook::write_import_template(&path)
            .map(|_| Some(path))
            .map_err(|err| format!("模板保存失败: {}", err))
    })
    .await
    .unwrap_or_else(|join_err| Err(format!("模板保存失败: {:?}", join_err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Homework, ImportReport, Stats, Student, Teacher};
    use crate::config::Config;

    fn console() -> App {
        let api = HttpAdminApi::new("http://127.0.0.1:5009").unwrap();
        let mut app = App::new(Config::default(), api);
        app.current_screen = Screen::Console;
        app
    }

    fn teacher(id: i64, username: &str) -> Teacher {
        Teacher { id, username: username.to_string(), subject: "数学".to_string(), ..Teacher::default() }
    }

    fn staged() -> StagedFile {
        StagedFile {
            path: PathBuf::from("/tmp/students.xlsx"),
            name: "students.xlsx".to_string(),
            size: 4096,
            rows: Some(12),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let mut app = console();
        app.current_screen = Screen::Login;
        app.login_username = "admin".to_string();
        assert!(app.reduce(Message::LoginPressed).is_empty());
        assert_eq!(app.login_error.as_deref(), Some(EMPTY_CREDENTIALS));

        app.login_password = "secret".to_string();
        let requests = app.reduce(Message::LoginPressed);
        assert_eq!(
            requests,
            vec![Request::Login(Credentials { username: "admin".to_string(), password: "secret".to_string() })]
        );
        assert_eq!(app.login_error, None);
    }

    #[test]
    fn successful_login_opens_the_teachers_tab() {
        let mut app = console();
        app.current_screen = Screen::Login;
        app.login_username = "admin".to_string();
        app.login_password = "secret".to_string();

        let requests = app.reduce(Message::LoggedIn(Ok("登录成功".to_string())));
        assert_eq!(requests, vec![Request::CurrentAdmin, Request::LoadStats, Request::LoadTeachers]);
        assert_eq!(app.current_screen, Screen::Console);
        assert!(app.login_password.is_empty());
        assert_eq!(app.config.username.as_deref(), Some("admin"));
    }

    #[test]
    fn rejected_login_stays_on_the_login_screen() {
        let mut app = console();
        app.current_screen = Screen::Login;
        app.reduce(Message::LoggedIn(Err("用户名或密码错误".to_string())));
        assert_eq!(app.current_screen, Screen::Login);
        assert_eq!(app.login_error.as_deref(), Some("用户名或密码错误"));
    }

    #[test]
    fn switching_tabs_reloads_that_tab() {
        let mut app = console();
        assert_eq!(app.reduce(Message::TabSelected(Tab::Students)), vec![Request::LoadStudents]);
        assert_eq!(app.active_tab, Tab::Students);
        assert_eq!(app.reduce(Message::TabSelected(Tab::Homeworks)), vec![Request::LoadHomeworks]);
        // No caching: selecting the same tab again fetches again.
        assert_eq!(app.reduce(Message::TabSelected(Tab::Homeworks)), vec![Request::LoadHomeworks]);
    }

    #[test]
    fn leaving_settings_reloads_the_active_tab() {
        let mut app = console();
        app.reduce(Message::TabSelected(Tab::Students));
        assert!(app.reduce(Message::GoToSettings).is_empty());
        assert_eq!(app.current_screen, Screen::Settings);

        assert_eq!(app.reduce(Message::GoToConsole), vec![Request::LoadStudents]);
        assert_eq!(app.current_screen, Screen::Console);
        assert_eq!(app.active_tab, Tab::Students);
    }

    #[test]
    fn loaded_lists_replace_the_previous_contents() {
        let mut app = console();
        app.reduce(Message::TeachersLoaded(Ok(vec![teacher(1, "a"), teacher(2, "b")])));
        app.reduce(Message::TeachersLoaded(Ok(vec![teacher(3, "c")])));
        assert_eq!(app.teachers, vec![teacher(3, "c")]);

        app.reduce(Message::TeachersLoaded(Err("未登录".to_string())));
        assert_eq!(app.notice.as_deref(), Some("未登录"));
    }

    #[test]
    fn adding_a_teacher_closes_the_dialog_and_refreshes() {
        let mut app = console();
        app.reduce(Message::ShowAddTeacher);
        app.reduce(Message::NewTeacherUsernameChanged("zhao".to_string()));
        app.reduce(Message::NewTeacherPasswordChanged("123456".to_string()));
        app.reduce(Message::NewTeacherSubjectChanged("物理".to_string()));

        let requests = app.reduce(Message::SubmitNewTeacher);
        assert_eq!(
            requests,
            vec![Request::AddTeacher(TeacherForm {
                username: "zhao".to_string(),
                password: "123456".to_string(),
                subject: "物理".to_string(),
            })]
        );

        let requests = app.reduce(Message::TeacherAdded(Ok("教师添加成功".to_string())));
        assert_eq!(requests, vec![Request::LoadTeachers, Request::LoadStats]);
        assert_eq!(app.add_teacher_dialog, None);
        assert_eq!(app.notice.as_deref(), Some("教师添加成功"));
    }

    #[test]
    fn a_failed_add_keeps_the_dialog_open() {
        let mut app = console();
        app.reduce(Message::ShowAddStudent);
        app.reduce(Message::NewStudentNameChanged("张三".to_string()));

        let requests = app.reduce(Message::StudentAdded(Err("学号已存在".to_string())));
        assert!(requests.is_empty());
        assert_eq!(app.notice.as_deref(), Some("学号已存在"));
        assert_eq!(app.add_student_dialog.as_ref().map(|f| f.name.as_str()), Some("张三"));
    }

    #[test]
    fn reopening_the_add_dialog_clears_it() {
        let mut app = console();
        app.reduce(Message::ShowAddTeacher);
        app.reduce(Message::NewTeacherUsernameChanged("draft".to_string()));
        app.reduce(Message::CloseAddTeacher);
        app.reduce(Message::ShowAddTeacher);
        assert_eq!(app.add_teacher_dialog, Some(TeacherForm::default()));
    }

    #[test]
    fn editing_prefills_and_reloads_only_the_list() {
        let mut app = console();
        app.reduce(Message::StartEditingTeacher(teacher(8, "qian")));
        let dialog = app.edit_teacher_dialog.clone().unwrap();
        assert_eq!(dialog.id, 8);
        assert_eq!(dialog.form.username, "qian");
        assert!(dialog.form.password.is_empty());

        app.reduce(Message::EditTeacherSubjectChanged("化学".to_string()));
        let requests = app.reduce(Message::SubmitEditedTeacher);
        assert!(matches!(&requests[..], [Request::EditTeacher(8, form)] if form.subject == "化学"));

        let requests = app.reduce(Message::TeacherEdited(Ok("教师信息更新成功".to_string())));
        assert_eq!(requests, vec![Request::LoadTeachers]);
        assert_eq!(app.edit_teacher_dialog, None);
    }

    #[test]
    fn student_edits_send_the_new_number() {
        let mut app = console();
        let student = Student { id: 4, name: "李四".to_string(), student_id: "2024004".to_string(), ..Student::default() };
        app.reduce(Message::StartEditingStudent(student));
        app.reduce(Message::EditStudentIdChanged("2024104".to_string()));
        let requests = app.reduce(Message::SubmitEditedStudent);
        assert_eq!(
            requests,
            vec![Request::EditStudent(4, StudentForm { name: "李四".to_string(), student_id: "2024104".to_string() })]
        );
        assert_eq!(app.reduce(Message::StudentEdited(Ok("学生信息更新成功".to_string()))), vec![Request::LoadStudents]);
    }

    #[test]
    fn delete_waits_for_confirmation() {
        let mut app = console();
        assert!(app.reduce(Message::DeleteTeacher(teacher(5, "sun"))).is_empty());
        assert_eq!(
            app.pending_confirmation,
            Some(Confirmation::DeleteTeacher { id: 5, username: "sun".to_string() })
        );

        assert!(app.reduce(Message::ConfirmDeclined).is_empty());
        assert_eq!(app.pending_confirmation, None);
        // A stray accept after declining sends nothing either.
        assert!(app.reduce(Message::ConfirmAccepted).is_empty());
    }

    #[test]
    fn confirmed_deletes_refresh_list_and_counts() {
        let mut app = console();
        let homework = Homework { id: 11, title: "周末作业".to_string(), ..Homework::default() };
        app.reduce(Message::DeleteHomework(homework));
        assert_eq!(app.reduce(Message::ConfirmAccepted), vec![Request::DeleteHomework(11)]);
        assert_eq!(app.pending_confirmation, None);

        let requests = app.reduce(Message::HomeworkDeleted(Ok("作业删除成功".to_string())));
        assert_eq!(requests, vec![Request::LoadHomeworks, Request::LoadStats]);

        let requests = app.reduce(Message::StudentDeleted(Err("学生不存在".to_string())));
        assert!(requests.is_empty());
        assert_eq!(app.notice.as_deref(), Some("学生不存在"));
    }

    #[test]
    fn upload_without_a_file_only_warns() {
        let mut app = console();
        app.reduce(Message::ShowImportStudents);
        assert!(app.reduce(Message::UploadImport).is_empty());
        assert_eq!(app.notice.as_deref(), Some(NO_FILE_SELECTED));
        assert!(!app.import_dialog.as_ref().unwrap().uploading);
    }

    #[test]
    fn upload_control_is_busy_only_while_in_flight() {
        let mut app = console();
        app.reduce(Message::ShowImportStudents);
        app.reduce(Message::ImportFileChosen(Some(staged())));
        assert!(app.import_dialog.as_ref().unwrap().can_upload());

        assert_eq!(app.reduce(Message::UploadImport), vec![Request::ImportStudents(staged())]);
        assert!(app.import_dialog.as_ref().unwrap().uploading);
        assert!(app.reduce(Message::UploadImport).is_empty());

        // A failure re-enables the control and keeps the file staged.
        assert!(app.reduce(Message::StudentsImported(Err("导入失败，请重试".to_string()))).is_empty());
        let dialog = app.import_dialog.as_ref().unwrap();
        assert!(!dialog.uploading);
        assert_eq!(dialog.staged, Some(staged()));

        app.reduce(Message::UploadImport);
        let report = ImportReport {
            success: true,
            message: "成功添加11个学生, 1个错误".to_string(),
            added: 11,
            skipped: 0,
            errors: vec!["第5行: 姓名或学号为空".to_string()],
        };
        let requests = app.reduce(Message::StudentsImported(Ok(report.clone())));
        assert_eq!(requests, vec![Request::LoadStudents, Request::LoadStats]);
        assert_eq!(app.import_dialog, None);
        assert_eq!(app.notice, Some(report.summary()));
    }

    #[test]
    fn closing_the_import_dialog_drops_the_staged_file() {
        let mut app = console();
        app.reduce(Message::ShowImportStudents);
        app.reduce(Message::ImportFileChosen(Some(staged())));
        app.reduce(Message::CloseImportStudents);
        app.reduce(Message::ShowImportStudents);
        assert_eq!(app.import_dialog, Some(ImportDialog::default()));

        app.reduce(Message::ImportFileChosen(None));
        assert_eq!(app.import_dialog.as_ref().unwrap().staged, None);
    }

    #[test]
    fn failed_dashboard_loads_keep_the_old_counts() {
        let mut app = console();
        let stats = Stats { teachers: 2, students: 40, homeworks: 7 };
        app.reduce(Message::StatsLoaded(Ok(stats)));
        app.reduce(Message::StatsLoaded(Err("connection refused".to_string())));
        assert_eq!(app.stats, Some(stats));
        assert_eq!(app.notice, None);
    }

    #[test]
    fn logout_asks_first_then_always_returns_to_login() {
        let mut app = console();
        app.teachers = vec![teacher(1, "a")];
        app.reduce(Message::ShowImportStudents);

        assert!(app.reduce(Message::Logout).is_empty());
        assert_eq!(app.pending_confirmation.as_ref().map(|c| c.prompt()), Some("确定要退出登录吗？".to_string()));
        assert_eq!(app.reduce(Message::ConfirmAccepted), vec![Request::Logout]);

        app.reduce(Message::LoggedOut);
        assert_eq!(app.current_screen, Screen::Login);
        assert!(app.teachers.is_empty());
        assert_eq!(app.import_dialog, None);
    }

    #[test]
    fn unknown_theme_names_are_ignored() {
        let mut app = console();
        app.reduce(Message::ThemeSelected("Dracula"));
        assert_eq!(app.config.theme_name, "Dracula");
        app.reduce(Message::ThemeSelected("Nope"));
        assert_eq!(app.config.theme_name, "Dracula");
    }
}
