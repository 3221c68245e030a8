//! In-memory platform with scripted responses and a call log.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sunset_client::{ClientError, DependentGroup, DependentHeader, Platform, TmlArtifact};
use sunset_core::entities::ModelAsset;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
}

pub fn model(id: &str, age_days: i64) -> ModelAsset {
    ModelAsset {
        id: id.into(),
        name: format!("Model {id}"),
        author_name: Some("analyst".into()),
        created_at: Some(now() - TimeDelta::days(age_days)),
    }
}

fn failure(message: &str) -> ClientError {
    ClientError::Api {
        status: 500,
        message: message.into(),
    }
}

#[derive(Default)]
pub struct FakePlatform {
    catalog: Option<Vec<ModelAsset>>,
    dependents: HashMap<String, Result<Vec<DependentGroup>, String>>,
    usage: HashMap<String, Result<u64, String>>,
    exports: HashMap<String, Result<Vec<TmlArtifact>, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn with_catalog(models: Vec<ModelAsset>) -> Self {
        Self {
            catalog: Some(models),
            ..Self::default()
        }
    }

    /// A platform whose catalog endpoint fails.
    pub fn broken_catalog() -> Self {
        Self::default()
    }

    /// Dependents of `model_id` as one group per `(platform_type, ids)`.
    pub fn dependents(mut self, model_id: &str, groups: &[(&str, &[&str])]) -> Self {
        let groups = groups
            .iter()
            .map(|(platform_type, ids)| DependentGroup {
                platform_type: (*platform_type).to_string(),
                headers: ids
                    .iter()
                    .map(|id| DependentHeader {
                        id: (*id).to_string(),
                        name: Some(format!("Dependent {id}")),
                    })
                    .collect(),
            })
            .collect();
        self.dependents.insert(model_id.into(), Ok(groups));
        self
    }

    pub fn answers(self, model_id: &str, ids: &[&str]) -> Self {
        self.dependents(model_id, &[("QUESTION_ANSWER_BOOK", ids)])
    }

    pub fn dependents_fail(mut self, model_id: &str) -> Self {
        self.dependents
            .insert(model_id.into(), Err(format!("dependents of {model_id}")));
        self
    }

    pub fn impressions(mut self, dependent_id: &str, count: u64) -> Self {
        self.usage.insert(dependent_id.into(), Ok(count));
        self
    }

    pub fn usage_fails(mut self, dependent_id: &str) -> Self {
        self.usage
            .insert(dependent_id.into(), Err(format!("usage of {dependent_id}")));
        self
    }

    pub fn alert_on(mut self, dependent_id: &str) -> Self {
        self.exports.insert(
            dependent_id.into(),
            Ok(vec![
                artifact(&format!("{dependent_id}.liveboard.tml")),
                artifact("alerts.tml"),
            ]),
        );
        self
    }

    pub fn export_fails(mut self, dependent_id: &str) -> Self {
        self.exports
            .insert(dependent_id.into(), Err(format!("export of {dependent_id}")));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn artifact(name: &str) -> TmlArtifact {
    TmlArtifact {
        artifact_name: name.into(),
        content: "{}".into(),
    }
}

impl Platform for FakePlatform {
    async fn search_models(&self) -> Result<Vec<ModelAsset>, ClientError> {
        self.record("search_models".into());
        self.catalog.clone().ok_or_else(|| failure("catalog"))
    }

    async fn fetch_dependents(
        &self,
        model_id: &str,
        max_count: u32,
    ) -> Result<Vec<DependentGroup>, ClientError> {
        self.record(format!("dependents:{model_id}:{max_count}"));
        match self.dependents.get(model_id) {
            Some(Ok(groups)) => Ok(groups.clone()),
            Some(Err(message)) => Err(failure(message)),
            None => Ok(Vec::new()),
        }
    }

    async fn query_usage(&self, dependent_id: &str, window_days: u32) -> Result<u64, ClientError> {
        self.record(format!("usage:{dependent_id}:{window_days}"));
        match self.usage.get(dependent_id) {
            Some(Ok(count)) => Ok(*count),
            Some(Err(message)) => Err(failure(message)),
            None => Ok(0),
        }
    }

    async fn export_definition(&self, id: &str) -> Result<Vec<TmlArtifact>, ClientError> {
        self.record(format!("export:{id}"));
        match self.exports.get(id) {
            Some(Ok(artifacts)) => Ok(artifacts.clone()),
            Some(Err(message)) => Err(failure(message)),
            None => Ok(vec![artifact(&format!("{id}.answer.tml"))]),
        }
    }
}
