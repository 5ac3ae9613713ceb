//! HTTP API for the TalentScout intake interview

mod handlers;
mod types;

pub use handlers::create_router;

use crate::archive::JsonArchive;
use crate::llm::LlmService;
use crate::runtime::{
    LlmClarifier, LlmQuestionProvider, ProductionRuntime, ProductionSessions,
};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<ProductionSessions>,
    pub archive: Arc<JsonArchive>,
}

impl AppState {
    pub fn new(llm: Option<Arc<dyn LlmService>>, archive: Arc<JsonArchive>) -> Self {
        let runtime = ProductionRuntime::new(
            LlmQuestionProvider::new(llm.clone()),
            LlmClarifier::new(llm),
            archive.clone(),
        );
        Self {
            sessions: Arc::new(ProductionSessions::new(runtime)),
            archive,
        }
    }
}
