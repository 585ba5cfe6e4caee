#![allow(dead_code)]

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use url_shortener::api::routes::public_routes;
use url_shortener::domain::{Clock, KeySource, RandomHexKeySource};
use url_shortener::server::build_state;
use url_shortener::state::AppState;

pub const PREFIX: &str = "http://localhost/";

pub const KEYS: [&str; 3] = ["fbk2fmwkuoeqrmda", "fbk2fmwkuoeqjmdb", "fbk203wkupeqomdc"];

/// Clock whose time only moves when the test says so.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    pub fn at(secs: i64) -> Arc<Self> {
        Arc::new(Self {
            secs: AtomicI64::new(secs),
        })
    }

    pub fn set(&self, secs: i64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.secs.load(Ordering::SeqCst), 0)
            .unwrap()
    }
}

/// Key source returning a fixed script, then random keys once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    script: Mutex<VecDeque<String>>,
}

impl ScriptedKeys {
    pub fn new(keys: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(keys.iter().map(|k| k.to_string()).collect()),
        })
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&self) -> String {
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| RandomHexKeySource.next_key())
    }
}

pub fn create_test_state(keys: Arc<ScriptedKeys>, clock: Arc<ManualClock>) -> AppState {
    build_state(PREFIX, keys, clock).unwrap()
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new().merge(public_routes()).with_state(state)
}
