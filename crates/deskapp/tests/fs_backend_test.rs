use deskapp::model::{Record, RecordKind};
use deskapp::store::backend::{StateBackend, StorageScope};
use deskapp::store::fs_backend::FsBackend;
use deskapp::store::StateStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();
    let scope = StorageScope::Local;

    backend.write(scope, "sidebar-open-groups", "{}").unwrap();
    assert_eq!(
        backend.read(scope, "sidebar-open-groups").unwrap(),
        Some("{}".to_string())
    );

    backend.remove(scope, "sidebar-open-groups").unwrap();
    assert_eq!(backend.read(scope, "sidebar-open-groups").unwrap(), None);
}

#[test]
fn test_fs_backend_layout_and_no_tmp_artifacts() {
    let (dir, backend) = setup();

    backend
        .write(StorageScope::Session, "created-visitors", "[]")
        .unwrap();

    let expected = dir.path().join("session").join("created-visitors.json");
    assert!(expected.exists());
    assert_eq!(fs::read_to_string(&expected).unwrap(), "[]");

    for entry in fs::read_dir(dir.path().join("session")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_overwrite() {
    let (_dir, backend) = setup();
    backend.write(StorageScope::Local, "k", "1").unwrap();
    backend.write(StorageScope::Local, "k", "2").unwrap();
    assert_eq!(backend.read(StorageScope::Local, "k").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_fs_backend_keys_and_clear() {
    let (_dir, backend) = setup();
    backend.write(StorageScope::Session, "b", "1").unwrap();
    backend.write(StorageScope::Session, "a", "1").unwrap();
    backend.write(StorageScope::Local, "c", "1").unwrap();

    assert_eq!(backend.keys(StorageScope::Session).unwrap(), vec!["a", "b"]);

    backend.clear(StorageScope::Session).unwrap();
    assert!(backend.keys(StorageScope::Session).unwrap().is_empty());
    assert_eq!(backend.keys(StorageScope::Local).unwrap(), vec!["c"]);
}

#[test]
fn test_fs_backend_missing_scope_dir() {
    let (_dir, backend) = setup();
    assert!(backend.keys(StorageScope::Local).unwrap().is_empty());
    assert_eq!(backend.read(StorageScope::Local, "nothing").unwrap(), None);
    assert!(backend.remove(StorageScope::Local, "nothing").is_ok());
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (_dir, backend) = setup();
    assert!(backend.write(StorageScope::Local, "../escape", "x").is_err());
    assert!(backend.write(StorageScope::Local, "", "x").is_err());
    assert!(backend.read(StorageScope::Local, ".hidden").is_err());
}

#[test]
fn test_state_store_over_files_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let record = Record::new("R-11631-000048", "03/10/2026")
        .with("reservationName", "Standup")
        .with("allDay", false)
        .with("capacity", 8u32);

    {
        let store = StateStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
        store.push_created(RecordKind::Reservation, &record).unwrap();
    }

    let store = StateStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(store.created(RecordKind::Reservation).unwrap(), vec![record]);
}

#[test]
fn test_state_store_discards_corrupt_file() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("local")).unwrap();
    fs::write(dir.path().join("local").join("sidebar-open-groups.json"), "not json").unwrap();

    let store = StateStore::with_backend(backend);
    let groups = store.open_groups().unwrap();
    assert!(!groups.is_open("Visitors"));
}
