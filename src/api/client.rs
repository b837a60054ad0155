use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use super::models::{AdminInfo, Listing};
use super::{
    AdminApi, ApiError, Credentials, Envelope, Homework, ImportReport, StagedFile, Student,
    StudentForm, Teacher, TeacherForm,
};

/// `AdminApi` over HTTP. The session cookie set by `login` lives in the
/// client's cookie store, shared by every clone.
#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    http: Client,
    base_url: String,
}

impl HttpAdminApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/admin/{}", self.base_url, path)
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        match response.json::<Listing<T>>().await? {
            Listing::Records(records) => Ok(records),
            Listing::Rejected(envelope) => Err(ApiError::Rejected(envelope.message)),
        }
    }

    async fn delete(&self, path: &str) -> Result<String, ApiError> {
        debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        envelope(response).await
    }
}

// Error statuses still carry an envelope, so the body is decoded regardless of status.
async fn envelope(response: Response) -> Result<String, ApiError> {
    response.json::<Envelope>().await?.into_result()
}

impl AdminApi for HttpAdminApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        debug!("POST login as {}", credentials.username);
        let response = self.http.post(self.url("login")).json(credentials).send().await?;
        envelope(response).await
    }

    async fn current_admin(&self) -> Result<String, ApiError> {
        let info: AdminInfo = self.http.get(self.url("current-info")).send().await?.json().await?;
        if info.success {
            Ok(info.username.unwrap_or_default())
        } else {
            Err(ApiError::Rejected(info.message))
        }
    }

    async fn logout(&self) -> Result<String, ApiError> {
        let response = self.http.post(self.url("logout")).send().await?;
        envelope(response).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.list("teachers").await
    }

    async fn add_teacher(&self, form: &TeacherForm) -> Result<String, ApiError> {
        let response = self.http.post(self.url("add-teacher")).json(form).send().await?;
        envelope(response).await
    }

    async fn edit_teacher(&self, id: i64, form: &TeacherForm) -> Result<String, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("edit-teacher/{}", id)))
            .json(form)
            .send()
            .await?;
        envelope(response).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<String, ApiError> {
        self.delete(&format!("delete-teacher/{}", id)).await
    }

    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.list("students").await
    }

    async fn add_student(&self, form: &StudentForm) -> Result<String, ApiError> {
        let response = self.http.post(self.url("add-student")).json(form).send().await?;
        envelope(response).await
    }

    async fn edit_student(&self, id: i64, form: &StudentForm) -> Result<String, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("edit-student/{}", id)))
            .json(form)
            .send()
            .await?;
        envelope(response).await
    }

    async fn delete_student(&self, id: i64) -> Result<String, ApiError> {
        self.delete(&format!("delete-student/{}", id)).await
    }

    async fn import_students(&self, file: &StagedFile) -> Result<ImportReport, ApiError> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|source| ApiError::File {
            path: file.path.display().to_string(),
            source,
        })?;
        debug!("POST import-students with {} ({} bytes)", file.name, bytes.len());

        let part = Part::bytes(bytes).file_name(file.name.clone()).mime_str(file.mime())?;
        let form = Form::new().part("file", part);
        let report: ImportReport = self
            .http
            .post(self.url("import-students"))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;

        if report.success {
            Ok(report)
        } else {
            Err(ApiError::Rejected(report.message))
        }
    }

    async fn list_homeworks(&self) -> Result<Vec<Homework>, ApiError> {
        self.list("homeworks").await
    }

    async fn delete_homework(&self, id: i64) -> Result<String, ApiError> {
        self.delete(&format!("delete-homework/{}", id)).await
    }
}
