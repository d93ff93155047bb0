//! Concurrent read-only use of a fully built registry.

use std::sync::Arc;
use std::thread;

use arbiter_policy::{AccessCheck, Params, Registry};
use serde_json::json;

const NO_PARENTS: &[&str] = &[];

fn build_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add_role("viewer", NO_PARENTS).unwrap();
    registry.add_role("editor", &["viewer"]).unwrap();
    registry.add_role("suspended", NO_PARENTS).unwrap();
    registry.add_resource("site", NO_PARENTS).unwrap();
    registry.add_resource("page", &["site"]).unwrap();

    registry.allow("viewer", "read", "site").unwrap();
    registry
        .allow_when(
            "editor",
            "write",
            "page",
            |_: &str, _: &str, _: &str, params: &Params| {
                params.get("locked") != Some(&json!(true))
            },
        )
        .unwrap();
    registry.deny("suspended", "", "site").unwrap();
    registry
}

#[test]
fn registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
}

#[test]
fn concurrent_queries_agree() {
    let registry = Arc::new(build_registry());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut params = Params::new();
                params.insert("locked".to_string(), json!(i % 2 == 0));

                for _ in 0..200 {
                    let read = registry
                        .resolve("editor", "read", "page", true, None)
                        .unwrap();
                    assert_eq!(read, AccessCheck::Allowed);

                    let write = registry
                        .resolve("editor", "write", "page", true, Some(&params))
                        .unwrap();
                    let expected = if i % 2 == 0 {
                        AccessCheck::Unknown
                    } else {
                        AccessCheck::Allowed
                    };
                    assert_eq!(write, expected);

                    let any = registry
                        .resolve_any(&["editor", "suspended"], "read", "page", None)
                        .unwrap();
                    assert_eq!(any, AccessCheck::Denied);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
