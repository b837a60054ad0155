use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Deserializer, Serialize};

/// Rows from older server versions can carry `null` in columns that have a
/// default, so `null` decodes the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Teacher {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub homework_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub enable_ai_review: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Student {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub student_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub submission_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Homework {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub teacher_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_students: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub submitted_count: i64,
}

/// Body of `add-teacher` and `edit-teacher`. An empty password on edit
/// keeps the stored one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TeacherForm {
    pub username: String,
    pub password: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StudentForm {
    pub name: String,
    pub student_id: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// The `{success, message}` wrapper every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
}

/// List endpoints answer with a bare array, or with an envelope when the
/// request is rejected (for example an expired session).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Records(Vec<T>),
    Rejected(Envelope),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AdminInfo {
    pub success: bool,
    pub message: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ImportReport {
    pub success: bool,
    pub message: String,
    pub added: i64,
    pub skipped: i64,
    pub errors: Vec<String>,
}

impl ImportReport {
    /// Message shown after an import, with per-row errors appended.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n\n错误详情:\n{}", self.message, self.errors.join("\n"))
        }
    }
}

/// A spreadsheet chosen for import but not uploaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// Candidate data rows found locally, `None` when the file could not be previewed.
    pub rows: Option<usize>,
}

impl StagedFile {
    pub fn size_kb(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }

    pub fn mime(&self) -> &'static str {
        if self.name.to_lowercase().ends_with(".xls") {
            "application/vnd.ms-excel"
        } else {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub teachers: usize,
    pub students: usize,
    pub homeworks: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "教师 {} / 学生 {} / 作业 {}", self.teachers, self.students, self.homeworks)
    }
}
