//! Shared helpers for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
use aws_sdk_s3::types::{DeletedObject, Error as S3Error, ObjectIdentifier};

use crate::config::Config;
use crate::matcher::Criteria;
use crate::safety::PromptHandler;
use crate::storage::StorageTrait;

pub(crate) fn init_dummy_tracing_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("dummy=trace")
        .try_init();
}

pub(crate) fn make_test_config() -> Config {
    Config {
        bucket: "test-bucket".to_string(),
        prefix: String::new(),
        criteria: Criteria::from_lists(".tmp", "backup"),
        dry_run: false,
        client_config: None,
        tracing_config: None,
    }
}

/// Build a DeleteObjects response with the given deleted keys and per-key
/// errors (`(key, code, message)`).
pub(crate) fn delete_output(
    deleted: &[&str],
    errors: &[(&str, &str, &str)],
) -> DeleteObjectsOutput {
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
    /// Report every requested key as deleted.
    Echo,
    Output(DeleteObjectsOutput),
    TransportError(String),
}

/// Mock storage that records delete calls and plays back scripted
/// responses. When the script queue is empty, every delete call reports
/// all requested keys as deleted.
pub(crate) struct MockStorage {
    keys: Vec<String>,
    fail_listing: bool,
    delete_responses: Mutex<VecDeque<DeleteResponse>>,
    recorded_deletes: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockStorage {
    pub(crate) fn with_keys(keys: Vec<String>) -> Self {
        Self {
            keys,
            fail_listing: false,
            delete_responses: Mutex::new(VecDeque::new()),
            recorded_deletes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_listing_failure() -> Self {
        let mut mock = Self::with_keys(vec!["unreachable.tmp".to_string()]);
        mock.fail_listing = true;
        mock
    }

    /// Handle to the recorded delete batches (one inner Vec per call).
    pub(crate) fn recorded_deletes(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        self.recorded_deletes.clone()
    }

    pub(crate) fn push_delete_response(&self, response: Result<DeleteObjectsOutput>) {
        let scripted = match response {
            Ok(output) => DeleteResponse::Output(output),
            Err(e) => DeleteResponse::TransportError(e.to_string()),
        };
        self.delete_responses.lock().unwrap().push_back(scripted);
    }

    pub(crate) fn push_delete_response_ok_echo(&self) {
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
pub(crate) struct ScriptedPrompt(String);

impl ScriptedPrompt {
    pub(crate) fn new(response: &str) -> Self {
        Self(response.to_string())
    }
}

impl PromptHandler for ScriptedPrompt {
    fn read_confirmation(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Prompt handler that must never be consulted.
pub(crate) struct PanicPrompt;

impl PromptHandler for PanicPrompt {
    fn read_confirmation(&self) -> Result<String> {
        unreachable!("confirmation prompt must not be consulted")
    }
}
