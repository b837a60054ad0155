//! REST client for the `/api/admin` endpoints of the homework platform.

pub mod client;
pub mod models;

use std::future::Future;
use thiserror::Error;

pub use client::HttpAdminApi;
pub use models::{
    Credentials, Envelope, Homework, ImportReport, StagedFile, Stats, Student, StudentForm, Teacher,
    TeacherForm,
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable envelope.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Text shown to the user: the server's own message for rejections,
    /// `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            ApiError::Transport(_) | ApiError::File { .. } => fallback.to_string(),
        }
    }
}

impl Envelope {
    pub fn into_result(self) -> Result<String, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Operations the console performs against the backend.
pub trait AdminApi: Clone + Send + Sync + 'static {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn current_admin(&self) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn logout(&self) -> impl Future<Output = Result<String, ApiError>> + Send;

    fn list_teachers(&self) -> impl Future<Output = Result<Vec<Teacher>, ApiError>> + Send;
    fn add_teacher(&self, form: &TeacherForm) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn edit_teacher(&self, id: i64, form: &TeacherForm) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn delete_teacher(&self, id: i64) -> impl Future<Output = Result<String, ApiError>> + Send;

    fn list_students(&self) -> impl Future<Output = Result<Vec<Student>, ApiError>> + Send;
    fn add_student(&self, form: &StudentForm) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn edit_student(&self, id: i64, form: &StudentForm) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn delete_student(&self, id: i64) -> impl Future<Output = Result<String, ApiError>> + Send;
    fn import_students(&self, file: &StagedFile) -> impl Future<Output = Result<ImportReport, ApiError>> + Send;

    fn list_homeworks(&self) -> impl Future<Output = Result<Vec<Homework>, ApiError>> + Send;
    fn delete_homework(&self, id: i64) -> impl Future<Output = Result<String, ApiError>> + Send;
}
