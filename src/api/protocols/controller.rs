use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};

/// Turns a request into exactly one response. Implementations never fail:
/// every outcome, including collaborator faults, is a response.
#[async_trait]
pub trait Controller<B: Send + 'static>: 'static + Sync + Send {
    async fn handle(&self, request: HttpRequest<B>) -> HttpResponse;
}
