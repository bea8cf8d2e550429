use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::GenerationError;
use crate::ports::{GenerationClient, GenerationRequest};

/// Canned answer for one kind of request.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    Fail(u16),
}

impl FakeReply {
    fn into_result(self) -> Result<String, GenerationError> {
        match self {
            FakeReply::Text(text) => Ok(text),
            FakeReply::Fail(status) => {
                Err(GenerationError::Api { status, body: "fake failure".to_string() })
            }
        }
    }
}

/// Deterministic stand-in for the generation service.
///
/// Requests are routed by shape: schema-constrained requests are discovery,
/// prompts written for the technical-writer persona are README requests,
/// everything else is a docstring request answered from a queue in order.
pub struct FakeGenerationClient {
    readme: FakeReply,
    discovery: FakeReply,
    docstrings: Mutex<VecDeque<FakeReply>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl Default for FakeGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGenerationClient {
    pub fn new() -> Self {
        Self {
            readme: FakeReply::Text("# Project\n\nGenerated README.".to_string()),
            discovery: FakeReply::Text("[]".to_string()),
            docstrings: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_readme(mut self, reply: FakeReply) -> Self {
        self.readme = reply;
        self
    }

    pub fn with_discovery(mut self, reply: FakeReply) -> Self {
        self.discovery = reply;
        self
    }

    /// Discovery answer listing the given function texts.
    pub fn discovering(self, functions: &[&str]) -> Self {
        let entries: Vec<_> =
            functions.iter().map(|code| serde_json::json!({ "function_code": code })).collect();
        self.with_discovery(FakeReply::Text(serde_json::Value::Array(entries).to_string()))
    }

    pub fn with_docstring(self, reply: FakeReply) -> Self {
        self.docstrings.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn docstring_requests(&self) -> Vec<GenerationRequest> {
        self.requests().into_iter().filter(|r| is_docstring_request(r)).collect()
    }
}

const README_PERSONAS: [&str; 2] = ["Technical Writer", "Технический Писатель"];

fn is_readme_request(request: &GenerationRequest) -> bool {
    !request.is_structured()
        && README_PERSONAS.iter().any(|persona| request.prompt.contains(persona))
}

fn is_docstring_request(request: &GenerationRequest) -> bool {
    !request.is_structured() && !is_readme_request(request)
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = if request.is_structured() {
            self.discovery.clone()
        } else if is_readme_request(request) {
            self.readme.clone()
        } else {
            self.docstrings.lock().unwrap().pop_front().unwrap_or(FakeReply::Fail(599))
        };
        reply.into_result()
    }
}
