// Shared fixtures for unit tests

use async_trait::async_trait;
use confluence_mcp::prelude::*;
use serde_json::json;
use std::sync::Mutex;

/// Observer that keeps every event for later inspection
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TransportEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TransportEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TransportObserver for RecordingObserver {
    fn on_event(&self, event: &TransportEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// In-memory Confluence returning canned responses
#[derive(Debug, Default)]
pub struct FakeConfluence {
    pub spaces: SpacesResponse,
    pub space: Option<SpaceDetailed>,
    pub pages: PagesResponse,
    pub page: Option<PageDetailed>,
    pub fail_status: Option<u16>,
    pub list_spaces_calls: Mutex<Vec<ListSpacesParams>>,
    pub list_pages_calls: Mutex<Vec<ListPagesParams>>,
    pub get_space_calls: Mutex<Vec<(String, GetSpaceParams)>>,
    pub get_page_calls: Mutex<Vec<(String, GetPageParams)>>,
}

fn api_error(status: u16) -> AppError {
    AppError::Api {
        status,
        status_text: if status == 404 {
            "Not Found".to_string()
        } else {
            "Internal Server Error".to_string()
        },
    }
}

#[async_trait]
impl SpaceService for FakeConfluence {
    async fn list_spaces(&self, params: &ListSpacesParams) -> Result<SpacesResponse, AppError> {
        self.list_spaces_calls.lock().unwrap().push(params.clone());
        match self.fail_status {
            Some(status) => Err(api_error(status)),
            None => Ok(self.spaces.clone()),
        }
    }

    async fn get_space(
        &self,
        id: &str,
        params: &GetSpaceParams,
    ) -> Result<SpaceDetailed, AppError> {
        self.get_space_calls
            .lock()
            .unwrap()
            .push((id.to_string(), params.clone()));
        if let Some(status) = self.fail_status {
            return Err(api_error(status));
        }
        self.space.clone().ok_or_else(|| api_error(404))
    }
}

#[async_trait]
impl PageService for FakeConfluence {
    async fn list_pages(&self, params: &ListPagesParams) -> Result<PagesResponse, AppError> {
        self.list_pages_calls.lock().unwrap().push(params.clone());
        match self.fail_status {
            Some(status) => Err(api_error(status)),
            None => Ok(self.pages.clone()),
        }
    }

    async fn get_page(&self, id: &str, params: &GetPageParams) -> Result<PageDetailed, AppError> {
        self.get_page_calls
            .lock()
            .unwrap()
            .push((id.to_string(), params.clone()));
        if let Some(status) = self.fail_status {
            return Err(api_error(status));
        }
        self.page.clone().ok_or_else(|| api_error(404))
    }
}

pub fn space_json() -> serde_json::Value {
    json!({
        "id": "98306",
        "key": "ENG",
        "name": "Engineering",
        "type": "global",
        "status": "current",
        "authorId": "5b10a2844c20165700ede21g",
        "createdAt": "2024-03-01T10:15:30.000Z",
        "homepageId": "98310",
        "description": {
            "plain": { "value": "Engineering handbook", "representation": "plain" }
        },
        "_links": { "webui": "/spaces/ENG" }
    })
}

pub fn spaces_response() -> SpacesResponse {
    serde_json::from_value(json!({
        "results": [
            space_json(),
            {
                "id": "131074",
                "key": "~alice",
                "name": "Alice",
                "type": "personal",
                "status": "archived",
                "_links": { "webui": "/spaces/~alice" }
            }
        ],
        "_links": {
            "next": "/wiki/api/v2/spaces?cursor=abc123&limit=2",
            "base": "https://acme.atlassian.net/wiki"
        }
    }))
    .unwrap()
}

pub fn space_detailed() -> SpaceDetailed {
    let mut value = space_json();
    value["_links"]["base"] = json!("https://acme.atlassian.net/wiki");
    value["labels"] = json!({
        "results": [{ "id": "1", "name": "docs", "prefix": "global" }],
        "meta": { "hasMore": false },
        "_links": {}
    });
    serde_json::from_value(value).unwrap()
}

pub fn page_json() -> serde_json::Value {
    json!({
        "id": "557060",
        "status": "current",
        "title": "Release notes",
        "spaceId": "98306",
        "parentId": "98310",
        "parentType": "page",
        "authorId": "5b10a2844c20165700ede21g",
        "createdAt": "2024-04-02T08:00:00.000Z",
        "version": {
            "createdAt": "2024-04-03T09:30:00.000Z",
            "number": 3,
            "minorEdit": false,
            "authorId": "5b10a2844c20165700ede21g"
        },
        "_links": { "webui": "/spaces/ENG/pages/557060", "editui": "/pages/resumedraft.action?draftId=557060" }
    })
}

pub fn pages_response() -> PagesResponse {
    serde_json::from_value(json!({
        "results": [page_json()],
        "_links": { "base": "https://acme.atlassian.net/wiki" }
    }))
    .unwrap()
}

pub fn page_detailed() -> PageDetailed {
    let mut value = page_json();
    value["_links"]["base"] = json!("https://acme.atlassian.net/wiki");
    value["body"] = json!({
        "storage": { "value": "<p>Shipped 1.2</p>", "representation": "storage" }
    });
    value["labels"] = json!({ "results": [{ "id": "7", "name": "release" }] });
    serde_json::from_value(value).unwrap()
}
