//! In-memory hotel search used by unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::value::RawValue;

use crate::upstream::HotelSearch;
use crate::{Result, TravelAiError};

pub(crate) const BEACH_TRIP: &str = r#"[{"description":"Beach trip","data":[{"name":"Sunset Inn","rating":4.5,"distance":{"value":2,"unit":"km"}}],"amenities":["wifi","pool"]}]"#;

enum Reply {
    Json(String),
    Status(u16),
}

/// Answers every prompt the same way and records what it was asked
pub(crate) struct StubSearch {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl StubSearch {
    pub(crate) fn json(body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Json(body.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl HotelSearch for StubSearch {
    async fn search(&self, prompt: &str) -> Result<Box<RawValue>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Json(body) => RawValue::from_string(body.clone())
                .map_err(|e| TravelAiError::invalid_response(e.to_string())),
            Reply::Status(status) => Err(TravelAiError::Upstream { status: *status }),
        }
    }
}
