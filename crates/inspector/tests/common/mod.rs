#![allow(dead_code)]
//! Shared helpers for the snapshot integration tests.

use anyhow::Error;
use inspector::{Platform, Snapshot, Viewport};
use std::path::PathBuf;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixture(name: &str) -> Result<String, Error> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    Ok(std::fs::read_to_string(path)?)
}

pub fn android_snapshot() -> Result<Snapshot, Error> {
    let source = fixture("android_login.xml")?;
    Snapshot::capture(
        &source,
        Viewport {
            width: 1080.0,
            height: 2280.0,
        },
        Platform::Android,
    )
}

pub fn ios_snapshot() -> Result<Snapshot, Error> {
    let source = fixture("ios_login.xml")?;
    Snapshot::capture(
        &source,
        Viewport {
            width: 390.0,
            height: 844.0,
        },
        Platform::Ios,
    )
}

/// Find the first node whose attribute equals `value`.
pub fn find_by_attr(snapshot: &Snapshot, name: &str, value: &str) -> Option<inspector::NodeId> {
    snapshot.tree().descendants().find(|&id| {
        snapshot
            .tree()
            .get(id)
            .and_then(|element| element.attr(name))
            == Some(value)
    })
}
