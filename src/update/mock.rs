//! Scripted resolver for unit tests

use crate::error::ResolveError;
use crate::registry::VersionResolver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted answer for one module@branch query
#[derive(Debug, Clone)]
pub enum Reply {
    /// Resolve to this version
    Version(&'static str),
    /// Resolve to this version after a delay
    Delayed(&'static str, Duration),
    /// Fail with a hard (non-fallback) error
    Fail(&'static str),
    /// Never complete
    Hang,
}

/// Resolver answering from a fixed table; unknown queries are unknown revisions
#[derive(Default)]
pub struct ScriptedResolver {
    replies: HashMap<(String, String), Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, module: &str, branch: &str, reply: Reply) -> Self {
        self.replies
            .insert((module.to_string(), branch.to_string()), reply);
        self
    }

    /// Queries made so far, as `module@branch`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VersionResolver for ScriptedResolver {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn resolve(&self, module: &str, branch: &str) -> Result<String, ResolveError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}@{}", module, branch));

        let reply = self
            .replies
            .get(&(module.to_string(), branch.to_string()))
            .cloned();

        match reply {
            Some(Reply::Version(v)) => Ok(v.to_string()),
            Some(Reply::Delayed(v, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(v.to_string())
            }
            Some(Reply::Fail(message)) => Err(ResolveError::ToolFailed {
                module: module.to_string(),
                branch: branch.to_string(),
                message: message.to_string(),
            }),
            Some(Reply::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(ResolveError::unknown_revision(module, branch)),
        }
    }
}
