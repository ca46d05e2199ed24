use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_returns_last_set_value() {
    let store = MemoryTokenStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("abc");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_treats_empty_token_as_absent() {
    let store = MemoryTokenStore::with_token("");
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_reads_as_empty_outside_browser() {
    let store = BrowserTokenStore;
    store.set("ignored");
    assert_eq!(store.get(), None);
    store.clear();
}
