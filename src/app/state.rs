use std::fmt;
use iced::Theme;
use crate::api::{HttpAdminApi, Homework, StagedFile, Stats, Student, StudentForm, Teacher, TeacherForm};
use crate::app::requests::Request;
use crate::config::Config;

pub struct App {
    pub api: HttpAdminApi,
    pub config: Config,
    pub theme: Theme,
    //
    pub current_screen: Screen,
    pub active_tab: Tab,
    //
    pub server_url: String,
    pub login_username: String,
    pub login_password: String,
    pub login_error: Option<String>,
    pub admin_name: Option<String>,
    //
    pub stats: Option<Stats>,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub homeworks: Vec<Homework>,
    // Each dialog is open while its field is `Some`
    pub add_teacher_dialog: Option<TeacherForm>,
    pub edit_teacher_dialog: Option<EditDialog<TeacherForm>>,
    pub add_student_dialog: Option<StudentForm>,
    pub edit_student_dialog: Option<EditDialog<StudentForm>>,
    pub import_dialog: Option<ImportDialog>,
    //
    pub pending_confirmation: Option<Confirmation>,
    pub notice: Option<String>,
}

impl App {
    pub fn new(config: Config, api: HttpAdminApi) -> Self {
        Self {
            theme: config.theme(),
            server_url: api.base_url().to_string(),
            login_username: config.username.clone().unwrap_or_default(),
            api,
            config,
            current_screen: Screen::default(),
            active_tab: Tab::default(),
            login_password: String::new(),
            login_error: None,
            admin_name: None,
            stats: None,
            teachers: vec![],
            students: vec![],
            homeworks: vec![],
            add_teacher_dialog: None,
            edit_teacher_dialog: None,
            add_student_dialog: None,
            edit_student_dialog: None,
            import_dialog: None,
            pending_confirmation: None,
            notice: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Console,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Teachers,
    Students,
    Homeworks,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Teachers, Tab::Students, Tab::Homeworks];

    /// The read that refreshes this tab.
    pub fn load_request(self) -> Request {
        match self {
            Tab::Teachers => Request::LoadTeachers,
            Tab::Students => Request::LoadStudents,
            Tab::Homeworks => Request::LoadHomeworks,
        }
    }

    pub fn export_stem(self) -> &'static str {
        match self {
            Tab::Teachers => "teachers",
            Tab::Students => "students",
            Tab::Homeworks => "homeworks",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Tab::Teachers => "教师管理",
            Tab::Students => "学生管理",
            Tab::Homeworks => "作业管理",
        })
    }
}

/// An edit form bound to the record it was opened for.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDialog<F> {
    pub id: i64,
    pub form: F,
}

/// Import dialog state; the staged file goes away with the dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportDialog {
    pub staged: Option<StagedFile>,
    pub uploading: bool,
}

impl ImportDialog {
    pub fn can_upload(&self) -> bool {
        self.staged.is_some() && !self.uploading
    }

    pub fn upload_label(&self) -> &'static str {
        if self.uploading { "导入中..." } else { "开始导入" }
    }
}

/// Actions that need an explicit yes before anything is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation {
    DeleteTeacher { id: i64, username: String },
    DeleteStudent { id: i64, name: String },
    DeleteHomework { id: i64, title: String },
    Logout,
}

impl Confirmation {
    pub fn prompt(&self) -> String {
        match self {
            Confirmation::DeleteTeacher { username, .. } => format!(
                "确定要删除教师 \"{}\" 吗？\n\n删除教师将同时删除该教师布置的所有作业及相关提交记录！",
                username
            ),
            Confirmation::DeleteStudent { name, .. } => format!(
                "确定要删除学生 \"{}\" 吗？\n\n删除学生将同时删除该学生的所有作业提交记录！",
                name
            ),
            Confirmation::DeleteHomework { title, .. } => format!(
                "确定要删除作业 \"{}\" 吗？\n\n删除作业将同时删除相关的所有提交记录！",
                title
            ),
            Confirmation::Logout => "确定要退出登录吗？".to_string(),
        }
    }

    pub fn into_request(self) -> Request {
        match self {
            Confirmation::DeleteTeacher { id, .. } => Request::DeleteTeacher(id),
            Confirmation::DeleteStudent { id, .. } => Request::DeleteStudent(id),
            Confirmation::DeleteHomework { id, .. } => Request::DeleteHomework(id),
            Confirmation::Logout => Request::Logout,
        }
    }
}
