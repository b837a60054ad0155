use log::{error, warn};
use crate::api::{AdminApi, ApiError, Credentials, StagedFile, Stats, StudentForm, TeacherForm};
use super::Message;

pub const LOGIN_FAILED: &str = "登录失败，请重试";
pub const LOAD_FAILED: &str = "加载失败，请刷新页面";
pub const ADD_FAILED: &str = "添加失败，请重试";
pub const EDIT_FAILED: &str = "编辑失败，请重试";
pub const DELETE_FAILED: &str = "删除失败，请重试";
pub const IMPORT_FAILED: &str = "导入失败，请重试";

/// A backend call the console wants made. Produced by `App::reduce`,
/// carried out by `execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Login(Credentials),
    CurrentAdmin,
    LoadStats,
    LoadTeachers,
    LoadStudents,
    LoadHomeworks,
    AddTeacher(TeacherForm),
    EditTeacher(i64, TeacherForm),
    DeleteTeacher(i64),
    AddStudent(StudentForm),
    EditStudent(i64, StudentForm),
    DeleteStudent(i64),
    ImportStudents(StagedFile),
    DeleteHomework(i64),
    Logout,
}

fn resolve<T>(result: Result<T, ApiError>, action: &str, fallback: &str) -> Result<T, String> {
    result.map_err(|err| {
        match &err {
            ApiError::Rejected(message) => warn!("{} rejected: {}", action, message),
            _ => error!("{} failed: {}", action, err),
        }
        err.user_message(fallback)
    })
}

pub async fn execute<A: AdminApi>(api: A, request: Request) -> Message {
    match request {
        Request::Login(credentials) => {
            Message::LoggedIn(resolve(api.login(&credentials).await, "login", LOGIN_FAILED))
        }
        Request::CurrentAdmin => {
            Message::AdminInfoLoaded(resolve(api.current_admin().await, "current admin", LOAD_FAILED))
        }
        Request::LoadStats => Message::StatsLoaded(load_stats(&api).await),
        Request::LoadTeachers => {
            Message::TeachersLoaded(resolve(api.list_teachers().await, "load teachers", LOAD_FAILED))
        }
        Request::LoadStudents => {
            Message::StudentsLoaded(resolve(api.list_students().await, "load students", LOAD_FAILED))
        }
        Request::LoadHomeworks => {
            Message::HomeworksLoaded(resolve(api.list_homeworks().await, "load homeworks", LOAD_FAILED))
        }
        Request::AddTeacher(form) => {
            Message::TeacherAdded(resolve(api.add_teacher(&form).await, "add teacher", ADD_FAILED))
        }
        Request::EditTeacher(id, form) => {
            Message::TeacherEdited(resolve(api.edit_teacher(id, &form).await, "edit teacher", EDIT_FAILED))
        }
        Request::DeleteTeacher(id) => {
            Message::TeacherDeleted(resolve(api.delete_teacher(id).await, "delete teacher", DELETE_FAILED))
        }
        Request::AddStudent(form) => {
            Message::StudentAdded(resolve(api.add_student(&form).await, "add student", ADD_FAILED))
        }
        Request::EditStudent(id, form) => {
            Message::StudentEdited(resolve(api.edit_student(id, &form).await, "edit student", EDIT_FAILED))
        }
        Request::DeleteStudent(id) => {
            Message::StudentDeleted(resolve(api.delete_student(id).await, "delete student", DELETE_FAILED))
        }
        Request::ImportStudents(file) => {
            Message::StudentsImported(resolve(api.import_students(&file).await, "import students", IMPORT_FAILED))
        }
        Request::DeleteHomework(id) => {
            Message::HomeworkDeleted(resolve(api.delete_homework(id).await, "delete homework", DELETE_FAILED))
        }
        Request::Logout => {
            // Best effort: the console leaves the session either way.
            if let Err(err) = api.logout().await {
                warn!("logout notification failed: {}", err);
            }
            Message::LoggedOut
        }
    }
}

/// Fetches the three lists concurrently; any failure drops the whole update.
pub async fn load_stats<A: AdminApi>(api: &A) -> Result<Stats, String> {
    let (teachers, students, homeworks) =
        tokio::try_join!(api.list_teachers(), api.list_students(), api.list_homeworks()).map_err(|err| {
            error!("loading dashboard counts failed: {}", err);
            err.to_string()
        })?;

    Ok(Stats {
        teachers: teachers.len(),
        students: students.len(),
        homeworks: homeworks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::api::{Homework, ImportReport, Student, Teacher};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Failure {
        Rejected,
        Transport,
    }

    /// In-memory backend recording every call it receives.
    #[derive(Clone, Default)]
    struct FakeApi {
        fail: Option<(&'static str, Failure)>,
        calls: Arc<Mutex<Vec<String>>>,
        import_errors: Vec<String>,
    }

    impl FakeApi {
        fn failing(operation: &'static str, failure: Failure) -> Self {
            Self { fail: Some((operation, failure)), ..Self::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn call(&self, operation: &'static str) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(operation.to_string());
            match self.fail {
                Some((name, Failure::Rejected)) if name == operation => {
                    Err(ApiError::Rejected(format!("{} refused", operation)))
                }
                Some((name, Failure::Transport)) if name == operation => Err(ApiError::File {
                    path: operation.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
                }),
                _ => Ok(()),
            }
        }
    }

    impl AdminApi for FakeApi {
        async fn login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
            self.call("login").map(|_| "登录成功".to_string())
        }

        async fn current_admin(&self) -> Result<String, ApiError> {
            self.call("current_admin").map(|_| "admin".to_string())
        }

        async fn logout(&self) -> Result<String, ApiError> {
            self.call("logout").map(|_| "登出成功".to_string())
        }

        async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
            self.call("list_teachers").map(|_| vec![Teacher::default(), Teacher::default()])
        }

        async fn add_teacher(&self, _form: &TeacherForm) -> Result<String, ApiError> {
            self.call("add_teacher").map(|_| "教师添加成功".to_string())
        }

        async fn edit_teacher(&self, _id: i64, _form: &TeacherForm) -> Result<String, ApiError> {
            self.call("edit_teacher").map(|_| "教师信息更新成功".to_string())
        }

        async fn delete_teacher(&self, _id: i64) -> Result<String, ApiError> {
            self.call("delete_teacher").map(|_| "教师删除成功".to_string())
        }

        async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
            self.call("list_students").map(|_| vec![Student::default(); 3])
        }

        async fn add_student(&self, _form: &StudentForm) -> Result<String, ApiError> {
            self.call("add_student").map(|_| "学生添加成功".to_string())
        }

        async fn edit_student(&self, _id: i64, _form: &StudentForm) -> Result<String, ApiError> {
            self.call("edit_student").map(|_| "学生信息更新成功".to_string())
        }

        async fn delete_student(&self, _id: i64) -> Result<String, ApiError> {
            self.call("delete_student").map(|_| "学生删除成功".to_string())
        }

        async fn import_students(&self, _file: &StagedFile) -> Result<ImportReport, ApiError> {
            self.call("import_students").map(|_| ImportReport {
                success: true,
                message: "成功添加1个学生".to_string(),
                added: 1,
                skipped: 0,
                errors: self.import_errors.clone(),
            })
        }

        async fn list_homeworks(&self) -> Result<Vec<Homework>, ApiError> {
            self.call("list_homeworks").map(|_| vec![])
        }

        async fn delete_homework(&self, _id: i64) -> Result<String, ApiError> {
            self.call("delete_homework").map(|_| "作业删除成功".to_string())
        }
    }

    #[tokio::test]
    async fn dashboard_counts_come_from_all_three_lists() {
        let api = FakeApi::default();
        let stats = load_stats(&api).await.unwrap();
        assert_eq!(stats, Stats { teachers: 2, students: 3, homeworks: 0 });

        let mut calls = api.calls();
        calls.sort();
        assert_eq!(calls, vec!["list_homeworks", "list_students", "list_teachers"]);
    }

    #[tokio::test]
    async fn one_failed_list_aborts_the_dashboard_update() {
        let api = FakeApi::failing("list_students", Failure::Transport);
        let message = execute(api, Request::LoadStats).await;
        assert!(matches!(message, Message::StatsLoaded(Err(_))));
    }

    #[tokio::test]
    async fn rejections_surface_the_server_message() {
        let api = FakeApi::failing("add_teacher", Failure::Rejected);
        let message = execute(api, Request::AddTeacher(TeacherForm::default())).await;
        assert!(matches!(message, Message::TeacherAdded(Err(text)) if text == "add_teacher refused"));
    }

    #[tokio::test]
    async fn transport_failures_use_the_generic_text() {
        let api = FakeApi::failing("delete_student", Failure::Transport);
        let message = execute(api, Request::DeleteStudent(5)).await;
        assert!(matches!(message, Message::StudentDeleted(Err(text)) if text == DELETE_FAILED));

        let api = FakeApi::failing("list_homeworks", Failure::Transport);
        let message = execute(api, Request::LoadHomeworks).await;
        assert!(matches!(message, Message::HomeworksLoaded(Err(text)) if text == LOAD_FAILED));
    }

    #[tokio::test]
    async fn logout_completes_even_when_the_server_call_fails() {
        let api = FakeApi::failing("logout", Failure::Transport);
        let message = execute(api.clone(), Request::Logout).await;
        assert!(matches!(message, Message::LoggedOut));
        assert_eq!(api.calls(), vec!["logout"]);
    }

    #[tokio::test]
    async fn import_reports_are_passed_through() {
        let api = FakeApi {
            import_errors: vec!["第3行: 姓名或学号为空".to_string()],
            ..FakeApi::default()
        };
        let file = StagedFile {
            path: "students.xlsx".into(),
            name: "students.xlsx".to_string(),
            size: 2048,
            rows: Some(1),
        };
        let message = execute(api, Request::ImportStudents(file)).await;
        match message {
            Message::StudentsImported(Ok(report)) => {
                assert_eq!(report.added, 1);
                assert_eq!(report.errors.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
