use examdesk_common::{
    BaseFilters, Exam, ManagedUser, PaginatedResponse, Question, SingleObjectResponse,
    TableResource,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::Result;

/// A listable backend resource.
pub trait Resource: DeserializeOwned + TableResource + Send {
    /// Collection path relative to the API base URL.
    const PATH: &'static str;
}

impl Resource for Exam {
    const PATH: &'static str = "exams";
}

impl Resource for Question {
    const PATH: &'static str = "questions";
}

impl Resource for ManagedUser {
    const PATH: &'static str = "users";
}

/// List and detail fetches for one resource type. Items come back in backend order.
pub struct ResourceService<T> {
    api: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

pub type ExamService = ResourceService<Exam>;
pub type QuestionService = ResourceService<Question>;
pub type UserService = ResourceService<ManagedUser>;

impl<T: Resource> ResourceService<T> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    pub async fn list(&self, filters: &BaseFilters) -> Result<PaginatedResponse<T>> {
        debug!(
            resource = T::PATH,
            page = filters.page_number(),
            size = filters.page_size(),
            "Fetching page."
        );
        self.api.get_page(T::PATH, filters).await
    }

    pub async fn get(&self, id: i64) -> Result<SingleObjectResponse<T>> {
        self.api.get_single(&format!("{}/{id}", T::PATH)).await
    }
}

impl ResourceService<Question> {
    pub async fn list_for_exam(
        &self,
        exam_id: i64,
        filters: &BaseFilters,
    ) -> Result<PaginatedResponse<Question>> {
        let filters = filters.clone().with_filter("examId", exam_id.to_string());
        self.list(&filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_mock;
    use axum::{
        extract::{Path, Query},
        routing::get,
        Json, Router,
    };
    use examdesk_common::enums::ExamStatus;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::time::Duration;

    fn exam_json(id: i64) -> Value {
        json!({ "id": id, "title": format!("Exam {id}"), "status": "DRAFT", "questionsCount": 3 })
    }

    async fn exams(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        // Not sorted by id.
        let ids = [30, 10, 20];
        let search = params.get("search").cloned().unwrap_or_default();
        let items: Vec<Value> = ids.iter().map(|id| exam_json(*id)).collect();
        Json(json!({ "items": items, "pagesCount": 1, "currentPage": 1, "type": search }))
    }

    async fn exam(Path(id): Path<i64>) -> Json<Value> {
        Json(json!({ "data": exam_json(id), "type": "exam" }))
    }

    async fn questions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let exam_id = params.get("examId").cloned().unwrap_or_default();
        Json(json!({
            "items": [{ "id": 1, "text": "Q", "type": "ESSAY", "difficulty": "HARD" }],
            "pagesCount": 1,
            "currentPage": 1,
            "type": exam_id
        }))
    }

    async fn api() -> ApiClient {
        let router = Router::new()
            .route("/exams", get(exams))
            .route("/exams/{id}", get(exam))
            .route("/questions", get(questions));
        let base = spawn_mock(router).await;
        ApiClient::new(&base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_list_keeps_backend_order() {
        let service = ExamService::new(api().await);
        let filters = BaseFilters::first_page().with_search("mid");
        let page = service.list(&filters).await.unwrap();

        let ids: Vec<i64> = page.items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(page.kind, "mid");
        assert_eq!(page.items[0].status, ExamStatus::Draft);
    }

    #[tokio::test]
    async fn test_get_single_exam() {
        let service = ExamService::new(api().await);
        let resp = service.get(42).await.unwrap();
        assert_eq!(resp.data.id, 42);
        assert_eq!(resp.data.title, "Exam 42");
        assert_eq!(resp.kind, "exam");
    }

    #[tokio::test]
    async fn test_questions_for_exam() {
        let service = QuestionService::new(api().await);
        let page = service.list_for_exam(7, &BaseFilters::first_page()).await.unwrap();
        assert_eq!(page.kind, "7");
        assert_eq!(page.items.len(), 1);
    }
}
