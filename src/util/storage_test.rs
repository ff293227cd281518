use super::*;

#[test]
fn memory_store_set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("authToken", "abc");
    assert_eq!(store.get("authToken").as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set("loginTime", "1");
    store.set("loginTime", "2");
    assert_eq!(store.get("loginTime").as_deref(), Some("2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("currentUser");
    assert!(store.is_empty());
}

#[test]
fn memory_store_works_through_shared_reference() {
    fn write<S: KeyValueStore>(storage: S) {
        storage.set("k", "v");
    }
    let store = MemoryStore::new();
    write(&store);
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let store = LocalStorage;
    store.set("authToken", "abc");
    assert_eq!(store.get("authToken"), None);
    store.remove("authToken");
}
