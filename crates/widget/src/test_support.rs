use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use helpcenter_core::{ContentGateway, FetchError, Resource, WidgetConfig};
use serde_json::Value;
use tokio::time::Instant;

use crate::Widget;

#[derive(Clone)]
struct Canned {
    body: Result<Value, u16>,
    delay: Duration,
}

/// In-memory gateway that records every request and replays canned bodies.
///
/// Unknown resources answer 404.
#[derive(Default)]
pub(crate) struct FakeGateway {
    canned: Mutex<HashMap<Resource, Canned>>,
    requests: Mutex<Vec<(Resource, Instant)>>,
}

impl FakeGateway {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, resource: Resource, body: Value) {
        self.respond_after(resource, body, Duration::ZERO);
    }

    pub(crate) fn respond_after(&self, resource: Resource, body: Value, delay: Duration) {
        self.canned.lock().unwrap().insert(resource, Canned { body: Ok(body), delay });
    }

    pub(crate) fn fail(&self, resource: Resource, status: u16) {
        self.canned
            .lock()
            .unwrap()
            .insert(resource, Canned { body: Err(status), delay: Duration::ZERO });
    }

    pub(crate) fn requests(&self) -> Vec<Resource> {
        self.requests.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub(crate) fn request_times(&self) -> Vec<(Resource, Instant)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, resource: &Resource) -> usize {
        self.requests.lock().unwrap().iter().filter(|(r, _)| r == resource).count()
    }

    pub(crate) fn search_count(&self) -> usize {
        self.requests.lock().unwrap().iter().filter(|(r, _)| r.is_search()).count()
    }
}

#[async_trait]
impl ContentGateway for FakeGateway {
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push((resource.clone(), Instant::now()));
        let canned = self.canned.lock().unwrap().get(resource).cloned();
        let canned = canned.unwrap_or(Canned { body: Err(404), delay: Duration::ZERO });
        if !canned.delay.is_zero() {
            tokio::time::sleep(canned.delay).await;
        }
        canned.body.map_err(|code| FetchError::Status { code, body: String::new() })
    }
}

pub(crate) fn widget_with(gateway: &Arc<FakeGateway>) -> Widget {
    let config = WidgetConfig::new("acme").unwrap();
    Widget::new(gateway.clone(), config)
}

/// Billing → Invoices → "Invoice FAQ", plus a second category.
pub(crate) fn acme_gateway() -> Arc<FakeGateway> {
    let gateway = FakeGateway::new();
    gateway.respond(
        Resource::Categories,
        serde_json::json!({"categories": [
            {"id": 1, "name": "Billing", "description": "Money"},
            {"id": 2, "name": "Accounts", "description": null}
        ]}),
    );
    gateway.respond(
        Resource::CategorySections { category_id: 1 },
        serde_json::json!({"sections": [{"id": 10, "name": "Invoices", "description": "Bills"}]}),
    );
    gateway.respond(
        Resource::CategorySections { category_id: 2 },
        serde_json::json!({"sections": [{"id": 20, "name": "Login"}]}),
    );
    gateway.respond(
        Resource::Section { section_id: 10 },
        serde_json::json!({"section": {"id": 10, "name": "Invoices", "category_id": 1}}),
    );
    gateway.respond(
        Resource::SectionArticles { section_id: 10 },
        serde_json::json!({"articles": [
            {"id": 5, "title": "Invoice FAQ", "body": "<p>Answers</p>"},
            {"id": 6, "title": "Refunds", "body": "<p>Refund policy</p>"}
        ]}),
    );
    gateway.respond(
        Resource::Section { section_id: 20 },
        serde_json::json!({"section": {"id": 20, "name": "Login", "category_id": 2}}),
    );
    gateway.respond(
        Resource::SectionArticles { section_id: 20 },
        serde_json::json!({"articles": []}),
    );
    gateway.respond(
        Resource::Article { article_id: 5 },
        serde_json::json!({"article": {"id": 5, "title": "Invoice FAQ", "body": "<p>Answers</p>"}}),
    );
    gateway
}
