use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("access_token", "tok123");
    assert_eq!(storage.get("access_token").as_deref(), Some("tok123"));
    assert_eq!(storage.len(), 1);

    storage.remove("access_token");
    assert_eq!(storage.get("access_token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let observer = storage.clone();
    storage.set("k", "v");
    assert_eq!(observer.get("k").as_deref(), Some("v"));
}

#[test]
fn load_json_round_trips_saved_value() {
    let storage = MemoryStorage::new();
    save_json(&storage, "list", &vec![1, 2, 3]);
    assert_eq!(load_json::<Vec<i32>>(&storage, "list"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_ignores_malformed_entries() {
    let storage = MemoryStorage::new();
    storage.set("list", "{not json");
    assert_eq!(load_json::<Vec<i32>>(&storage, "list"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}
