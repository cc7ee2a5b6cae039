//! Fixtures and fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::json;

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::{Role, TokenBundle, User};

pub const BASE_URL: &str = "http://ptas.test/api/v1";

pub fn user(username: &str, role: Role) -> User {
    User {
        id: 1,
        email: format!("{username}@ptas.test"),
        username: username.to_owned(),
        full_name: format!("{username} full"),
        role,
        plant_id: Some(1),
        is_active: true,
        created_at: "2024-01-15T10:00:00".to_owned(),
    }
}

pub fn bundle(token: &str, user: User) -> TokenBundle {
    TokenBundle {
        access_token: token.to_owned(),
        refresh_token: None,
        token_type: "bearer".to_owned(),
        user,
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse {
    HttpResponse { status, body: body.to_string() }
}

pub fn detail_response(status: u16, detail: &str) -> HttpResponse {
    json_response(status, &json!({ "detail": detail }))
}

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: HttpResponse) -> &Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request recorded")
    }
}

impl HttpTransport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_owned())))
    }
}
