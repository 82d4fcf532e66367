use super::*;

#[test]
fn memory_storage_missing_key_reads_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read(TOKEN_KEY), Ok(None));
}

#[test]
fn memory_storage_write_then_read() {
    let storage = MemoryStorage::new();
    storage.write(TOKEN_KEY, "abc").unwrap();
    assert_eq!(storage.read(TOKEN_KEY), Ok(Some("abc".to_owned())));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.write(TOKEN_KEY, "shared").unwrap();
    assert_eq!(view.read(TOKEN_KEY), Ok(Some("shared".to_owned())));
}

#[test]
fn memory_storage_with_entry_prepopulates() {
    let storage = MemoryStorage::with_entry(TOKEN_KEY, "seed");
    assert_eq!(storage.read(TOKEN_KEY), Ok(Some("seed".to_owned())));
    assert_eq!(storage.read("other"), Ok(None));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_outside_browser() {
    assert_eq!(LocalStorage.read(TOKEN_KEY), Err(StorageError::Unavailable));
    assert_eq!(LocalStorage.write(TOKEN_KEY, "x"), Err(StorageError::Unavailable));
}
