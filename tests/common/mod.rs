//! Shared helpers for integration tests: a scriptable storage backend and
//! prompt handlers, wired into the pipeline through the public library API.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::types::{DeletedObject, Error as S3Error, ObjectIdentifier};

use r2sweep::Config;
use r2sweep::matcher::Criteria;
use r2sweep::safety::PromptHandler;
use r2sweep::storage::StorageTrait;

pub fn make_config(extensions: &str, patterns: &str) -> Config {
    Config {
        bucket: "test-bucket".to_string(),
        prefix: String::new(),
        criteria: Criteria::from_lists(extensions, patterns),
        dry_run: false,
        client_config: None,
        tracing_config: None,
    }
}

/// Build a DeleteObjects response with the given deleted keys and per-key
/// errors (`(key, code, message)`).
pub fn delete_output(deleted: &[&str], errors: &[(&str, &str, &str)]) -> DeleteObjectsOutput {
    let mut builder = DeleteObjectsOutput::builder();
    for key in deleted {
        builder = builder.deleted(DeletedObject::builder().key(*key).build());
    }
    for (key, code, message) in errors {
        builder = builder.errors(
            S3Error::builder()
                .key(*key)
                .code(*code)
                .message(*message)
                .build(),
        );
    }
    builder.build()
}

enum DeleteResponse {
    Echo,
    Output(DeleteObjectsOutput),
    TransportError(String),
}

/// Mock storage that records every delete batch and plays back scripted
/// responses. With an empty script, every delete call reports all requested
/// keys as deleted.
pub struct MockStorage {
    keys: Vec<String>,
    fail_listing: bool,
    delete_responses: Mutex<VecDeque<DeleteResponse>>,
    recorded_deletes: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockStorage {
    pub fn with_keys(keys: Vec<String>) -> Self {
        Self {
            keys,
            fail_listing: false,
            delete_responses: Mutex::new(VecDeque::new()),
            recorded_deletes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_listing_failure() -> Self {
        let mut mock = Self::with_keys(vec!["unreachable.tmp".to_string()]);
        mock.fail_listing = true;
        mock
    }

    pub fn recorded_deletes(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        self.recorded_deletes.clone()
    }

    pub fn push_delete_response(&self, response: Result<DeleteObjectsOutput>) {
        let scripted = match response {
            Ok(output) => DeleteResponse::Output(output),
            Err(e) => DeleteResponse::TransportError(e.to_string()),
        };
        self.delete_responses.lock().unwrap().push_back(scripted);
    }

    pub fn push_delete_response_ok_echo(&self) {
        self.delete_responses
            .lock()
            .unwrap()
            .push_back(DeleteResponse::Echo);
    }
}

#[async_trait]
impl StorageTrait for MockStorage {
    async fn list_objects(&self, _max_keys: i32) -> Result<Vec<String>> {
        if self.fail_listing {
            return Err(anyhow!("simulated listing failure"));
        }
        Ok(self.keys.clone())
    }

    async fn delete_objects(&self, objects: Vec<ObjectIdentifier>) -> Result<DeleteObjectsOutput> {
        let keys: Vec<String> = objects.iter().map(|o| o.key().to_string()).collect();
        self.recorded_deletes.lock().unwrap().push(keys.clone());

        let scripted = self.delete_responses.lock().unwrap().pop_front();
        match scripted {
            None | Some(DeleteResponse::Echo) => {
                let mut builder = DeleteObjectsOutput::builder();
                for key in &keys {
                    builder = builder.deleted(DeletedObject::builder().key(key).build());
                }
                Ok(builder.build())
            }
            Some(DeleteResponse::Output(output)) => Ok(output),
            Some(DeleteResponse::TransportError(message)) => Err(anyhow!(message)),
        }
    }
}

/// Prompt handler returning a scripted response.
pub struct ScriptedPrompt(String);

impl ScriptedPrompt {
    pub fn new(response: &str) -> Self {
        Self(response.to_string())
    }
}

impl PromptHandler for ScriptedPrompt {
    fn read_confirmation(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Prompt handler that must never be consulted.
pub struct PanicPrompt;

impl PromptHandler for PanicPrompt {
    fn read_confirmation(&self) -> Result<String> {
        unreachable!("confirmation prompt must not be consulted")
    }
}
