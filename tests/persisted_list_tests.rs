//! PersistedList over the file-backed store

use quicklist::application::{ListWidget, PersistedList};
use quicklist::domain::{Entry, ListKind};
use quicklist::infrastructure::{FileStore, KeyValueStore};
use tempfile::TempDir;

#[test]
fn test_state_survives_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp.path()).unwrap();
        let mut list = PersistedList::new("quickListItems", store);
        list.append_pending("Buy milk").unwrap();
        list.append("Pay rent", true).unwrap();
    }

    let store = FileStore::open(temp.path()).unwrap();
    let list = PersistedList::new("quickListItems", store);
    assert_eq!(
        list.load().unwrap(),
        vec![Entry::pending("Buy milk"), Entry::new("Pay rent", true)]
    );
}

#[test]
fn test_reads_entries_without_completed_field() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();
    store
        .set(
            "moodJournalEntries",
            r#"[{"text":"😌 Calm - 2024-03-01 07:45"}]"#,
        )
        .unwrap();

    let widget = ListWidget::new(ListKind::Mood, store);
    assert_eq!(
        widget.rows().unwrap(),
        vec![Entry::pending("😌 Calm - 2024-03-01 07:45")]
    );
}

#[test]
fn test_clear_removes_file() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    let mut list = PersistedList::new("quickListItems", store);

    list.append_pending("a").unwrap();
    assert!(temp.path().join("quickListItems.json").exists());

    list.clear().unwrap();
    assert!(!temp.path().join("quickListItems.json").exists());
    assert!(list.load().unwrap().is_empty());

    // Clearing an absent key is fine
    list.clear().unwrap();
}

#[test]
fn test_binary_corruption_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("quickListItems.json"), [0xff, 0xfe, 0x00]).unwrap();

    let store = FileStore::open(temp.path()).unwrap();
    let mut list = PersistedList::new("quickListItems", store);
    assert!(list.load().unwrap().is_empty());

    list.append_pending("recovered").unwrap();
    assert_eq!(list.load().unwrap(), vec![Entry::pending("recovered")]);
}
