use std::path::PathBuf;
use crate::api::{Homework, ImportReport, StagedFile, Stats, Student, Teacher};
use crate::app::state::Tab;

#[derive(Debug, Clone)]
pub enum Message {
    ServerUrlChanged(String),
    UsernameChanged(String),
    PasswordChanged(String),
    LoginPressed,
    LoggedIn(Result<String, String>),
    AdminInfoLoaded(Result<String, String>),
    //
    TabSelected(Tab),
    GoToConsole,
    GoToSettings,
    ThemeSelected(&'static str),
    Logout,
    LoggedOut,
    //
    StatsLoaded(Result<Stats, String>),
    TeachersLoaded(Result<Vec<Teacher>, String>),
    StudentsLoaded(Result<Vec<Student>, String>),
    HomeworksLoaded(Result<Vec<Homework>, String>),
    // Teachers
    ShowAddTeacher,
    CloseAddTeacher,
    NewTeacherUsernameChanged(String),
    NewTeacherPasswordChanged(String),
    NewTeacherSubjectChanged(String),
    SubmitNewTeacher,
    TeacherAdded(Result<String, String>),
    StartEditingTeacher(Teacher),
    CancelEditingTeacher,
    EditTeacherUsernameChanged(String),
    EditTeacherPasswordChanged(String),
    EditTeacherSubjectChanged(String),
    SubmitEditedTeacher,
    TeacherEdited(Result<String, String>),
    DeleteTeacher(Teacher),
    TeacherDeleted(Result<String, String>),
    // Students
    ShowAddStudent,
    CloseAddStudent,
    NewStudentNameChanged(String),
    NewStudentIdChanged(String),
    SubmitNewStudent,
    StudentAdded(Result<String, String>),
    StartEditingStudent(Student),
    CancelEditingStudent,
    EditStudentNameChanged(String),
    EditStudentIdChanged(String),
    SubmitEditedStudent,
    StudentEdited(Result<String, String>),
    DeleteStudent(Student),
    StudentDeleted(Result<String, String>),
    // Import
    ShowImportStudents,
    CloseImportStudents,
    ChooseImportFile,
    ImportFileChosen(Option<StagedFile>),
    UploadImport,
    StudentsImported(Result<ImportReport, String>),
    SaveImportTemplate,
    TemplateSaved(Result<Option<PathBuf>, String>),
    // Homeworks
    DeleteHomework(Homework),
    HomeworkDeleted(Result<String, String>),
    //
    ExportTable,
    TableExported(Result<PathBuf, String>),
    //
    ConfirmAccepted,
    ConfirmDeclined,
    DismissNotice,
    NoOp,
}
