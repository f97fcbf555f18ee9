//! Scripted transport and DTO fixtures shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::error::ApiError;
use super::request::{HttpRequest, HttpResponse};
use super::transport::Transport;
use super::types::{Root, RootType, User, Workspace};

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<HttpResponse, ApiError>>,
    seen: Vec<HttpRequest>,
}

/// Transport replaying canned replies in order and recording every request.
///
/// Clones share the same script, so a test can keep one handle and give the
/// other to the client under test.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with `status` and a JSON `body`.
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .replies
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure (no response at all).
    pub fn fail(&self, message: &str) -> &Self {
        self.script.borrow_mut().replies.push_back(Err(ApiError::Network(message.to_owned())));
        self
    }

    /// Requests sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().seen.clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut script = self.script.borrow_mut();
        script.seen.push(request);
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub const ME_JSON: &str = r#"{"id":"u1","email":"a@b.com","username":"a","is_active":true}"#;

#[must_use]
pub fn me() -> User {
    User {
        id: "u1".to_owned(),
        created: None,
        email: "a@b.com".to_owned(),
        username: "a".to_owned(),
        is_active: true,
    }
}

#[must_use]
pub fn workspace(name: &str, base_path: Option<&str>) -> Workspace {
    Workspace {
        id: format!("w-{name}"),
        created: "2021-03-01T12:00:00".to_owned(),
        name: name.to_owned(),
        base_path: base_path.map(str::to_owned),
        owner_id: "u1".to_owned(),
        root_id: "r1".to_owned(),
        owner: me(),
        root: Root {
            id: "r1".to_owned(),
            created: "2021-03-01T12:00:00".to_owned(),
            root_type: RootType::Private,
            bucket: "fast".to_owned(),
            base_path: "private".to_owned(),
            node_id: "n1".to_owned(),
        },
    }
}
