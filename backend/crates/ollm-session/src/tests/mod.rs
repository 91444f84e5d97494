
use crate::Identity;

use std::sync::{Arc, Mutex};

/// Collects every value an observer was called with
pub(crate) type Recorded = Arc<Mutex<Vec<Option<Identity>>>>;

pub(crate) fn recorder() -> (Recorded, impl Fn(Option<&Identity>) + Send + Sync + 'static) {
    let calls: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let observer = move |value: Option<&Identity>| {
        sink.lock().unwrap().push(value.cloned());
    };
    (calls, observer)
}

pub(crate) fn identity(email: &str, nickname: &str) -> Identity {
    Identity::new(email, nickname).unwrap()
}
