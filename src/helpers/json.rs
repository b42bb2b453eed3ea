use actix_web::error::InternalError;
use actix_web::HttpResponse;
use serde_derive::Serialize;

/// Response envelope shared by every route
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) item: Option<T>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    item: Option<T>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self { item: None }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    fn to_response(self, status: &str, message: String, code: u32) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code,
            item: self.item,
        }
    }

    pub(crate) fn ok(self, message: impl ToString) -> HttpResponse {
        let message = non_empty(message.to_string(), "Success");
        HttpResponse::Ok().json(self.to_response("OK", message, 200))
    }

    pub(crate) fn internal_server_error(self, message: impl ToString) -> actix_web::Error {
        let message = non_empty(message.to_string(), "Internal error");
        let response = self.to_response("Error", message.clone(), 500);
        InternalError::from_response(message, HttpResponse::InternalServerError().json(response))
            .into()
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
