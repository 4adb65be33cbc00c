//! Repository Integration Tests
//!
//! Tests for BoardRepository and ChecklistStore over in-memory storage.

#[cfg(test)]
mod tests {
    use crate::command::{Command, Outcome};
    use crate::config::StoreConfig;
    use crate::domain::{Board, DomainError, ItemRef, Theme};
    use crate::reorder::{Point, Rect};
    use crate::repository::{
        BoardRepository, KeyValueStorage, MemoryStorage, StorageError, StorageResult,
    };
    use crate::store::ChecklistStore;

    const DATA_KEY: &str = "myListManagerData";

    /// Storage whose writes always fail, like a full localStorage quota
    struct FullStorage;

    impl KeyValueStorage for FullStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("QuotaExceededError".to_string()))
        }
    }

    fn stored_board(store: &ChecklistStore<MemoryStorage>) -> Board {
        let raw = store.storage().get(DATA_KEY).unwrap().expect("board persisted");
        serde_json::from_str(&raw).unwrap()
    }

    fn two_lists() -> MemoryStorage {
        MemoryStorage::with_value(
            DATA_KEY,
            r#"[
                {"id":1,"title":"L1","expanded":true,
                 "items":[{"id":10,"text":"A","completed":false,"link":""}]},
                {"id":2,"title":"L2","expanded":false,
                 "items":[{"id":20,"text":"B","completed":false,"link":""}]}
            ]"#,
        )
    }

    #[test]
    fn test_load_absent_uses_defaults() {
        let repo = BoardRepository::new(MemoryStorage::new());
        assert_eq!(repo.load(), Board::default_dataset());
        assert_eq!(repo.load_theme(), Theme::Light);
    }

    #[test]
    fn test_load_malformed_uses_defaults() {
        for raw in ["not json", "null", r#"{"id":1}"#, r#"[{"title":"no id"}]"#] {
            let repo = BoardRepository::new(MemoryStorage::with_value(DATA_KEY, raw));
            assert_eq!(repo.load(), Board::default_dataset(), "input: {}", raw);
        }
    }

    #[test]
    fn test_load_empty_array_is_empty_board() {
        let repo = BoardRepository::new(MemoryStorage::with_value(DATA_KEY, "[]"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = BoardRepository::new(MemoryStorage::new());
        let mut board = Board::default_dataset();
        board.toggle_expanded(1).unwrap();
        repo.save(&board).unwrap();
        assert_eq!(repo.load(), board);
    }

    #[test]
    fn test_custom_keys() {
        let config = StoreConfig {
            data_key: "board".to_string(),
            theme_key: "scheme".to_string(),
        };
        let repo = BoardRepository::with_config(MemoryStorage::new(), config);
        repo.save(&Board::default()).unwrap();
        repo.save_theme(Theme::Dark).unwrap();
        assert_eq!(repo.storage().get("board").unwrap().as_deref(), Some("[]"));
        assert_eq!(repo.storage().get("scheme").unwrap().as_deref(), Some("dark"));
        assert_eq!(repo.storage().get(DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_list_and_item_persist() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let outcome = store
            .dispatch(Command::AddList { title: Some("Groceries".to_string()) })
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);

        let list = store.board().lists().last().unwrap().clone();
        assert_eq!(list.title, "Groceries");
        assert!(list.expanded);
        assert!(list.id > 103);

        store
            .dispatch(Command::AddItem { list_id: list.id, text: Some("Milk".to_string()) })
            .unwrap();
        let list = store.board().list(list.id).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "Milk");
        assert_ne!(list.items[0].id, list.id);

        assert_eq!(&stored_board(&store), store.board());
    }

    #[test]
    fn test_cancelled_prompts_do_not_mutate() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let item = ItemRef::new(1, 101);
        let commands = [
            Command::AddList { title: None },
            Command::AddList { title: Some(String::new()) },
            Command::AddItem { list_id: 1, text: None },
            Command::AddItem { list_id: 1, text: Some(String::new()) },
            Command::SetLink { item, link: None },
        ];
        for command in commands {
            assert_eq!(store.dispatch(command).unwrap(), Outcome::Cancelled);
        }
        assert_eq!(store.board(), &Board::default_dataset());
        assert_eq!(store.storage().get(DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_declined_deletes_do_not_mutate() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let outcome = store.dispatch(Command::DeleteList { list_id: 1, confirmed: false }).unwrap();
        assert_eq!(outcome, Outcome::Declined);
        let outcome = store
            .dispatch(Command::DeleteItem { item: ItemRef::new(1, 101), confirmed: false })
            .unwrap();
        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(store.board(), &Board::default_dataset());
    }

    #[test]
    fn test_delete_list_removes_its_items_only() {
        let mut store = ChecklistStore::open(two_lists());
        store.dispatch(Command::DeleteList { list_id: 1, confirmed: true }).unwrap();
        assert_eq!(store.board().len(), 1);
        assert_eq!(store.board().list(2).unwrap().item_ids(), vec![20]);
        assert!(store.board().item(ItemRef::new(1, 10)).is_none());
        assert_eq!(&stored_board(&store), store.board());
    }

    #[test]
    fn test_set_link_and_clear() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let item = ItemRef::new(1, 101);
        store
            .dispatch(Command::SetLink { item, link: Some("https://example.org".to_string()) })
            .unwrap();
        assert_eq!(store.board().item(item).unwrap().link, "https://example.org");

        store.dispatch(Command::SetLink { item, link: Some(String::new()) }).unwrap();
        let item = store.board().item(item).unwrap();
        assert!(!item.has_link());
        assert_eq!(item.link_or_placeholder(), "https://");
    }

    #[test]
    fn test_toggle_commands() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let item = ItemRef::new(1, 101);
        store.dispatch(Command::ToggleCompleted { item }).unwrap();
        assert!(store.board().item(item).unwrap().completed);
        store.dispatch(Command::ToggleCompleted { item }).unwrap();
        assert!(!store.board().item(item).unwrap().completed);

        store.dispatch(Command::ToggleExpanded { list_id: 1 }).unwrap();
        assert!(!stored_board(&store).list(1).unwrap().expanded);
    }

    #[test]
    fn test_unknown_ids_error_without_write() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        let result = store.dispatch(Command::ToggleExpanded { list_id: 42 });
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        let result = store.dispatch(Command::AddItem { list_id: 42, text: Some("x".to_string()) });
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(store.storage().get(DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let mut store = ChecklistStore::open(FullStorage);
        let result = store.dispatch(Command::ToggleExpanded { list_id: 1 });
        assert!(matches!(result, Err(DomainError::Storage(_))));
        // The in-memory change stays.
        assert!(!store.board().list(1).unwrap().expanded);
        assert!(store.toggle_theme().is_err());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut store = ChecklistStore::open(MemoryStorage::new());
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.storage().get("theme").unwrap().as_deref(), Some("dark"));

        let reopened = ChecklistStore::open(MemoryStorage::with_value("theme", "dark"));
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn test_list_drag_never_persists_collapse() {
        let mut store = ChecklistStore::open(two_lists());
        store.begin_list_drag(1).unwrap();
        assert!(!store.board().list(1).unwrap().expanded);

        let zones = vec![
            (0, Rect::new(0.0, 0.0, 100.0, 8.0)),
            (1, Rect::new(0.0, 100.0, 100.0, 8.0)),
            (2, Rect::new(0.0, 200.0, 100.0, 8.0)),
        ];
        assert!(store.hover_list(Point::new(50.0, 210.0), zones));
        assert_eq!(store.drag().highlighted_zone(), Some(2));

        assert_eq!(store.drop_list(None).unwrap(), Some(1));
        let saved = stored_board(&store);
        assert_eq!(saved.lists()[1].id, 1);
        assert!(saved.list(1).unwrap().expanded);

        store.end_list_drag().unwrap();
        assert!(store.drag().is_idle());
        assert!(store.board().list(1).unwrap().expanded);
        assert!(!store.board().list(2).unwrap().expanded);
        assert_eq!(&stored_board(&store), store.board());
    }

    #[test]
    fn test_cancelled_list_drag_restores_and_persists() {
        let mut store = ChecklistStore::open(two_lists());
        store.begin_list_drag(1).unwrap();
        store.end_list_drag().unwrap();
        let saved: Vec<u64> = stored_board(&store).lists().iter().map(|l| l.id).collect();
        assert_eq!(saved, vec![1, 2]);
        assert!(store.board().list(1).unwrap().expanded);
    }

    #[test]
    fn test_item_drag_across_lists_persists() {
        let mut store = ChecklistStore::open(two_lists());
        store.begin_item_drag(ItemRef::new(1, 10)).unwrap();
        let rows = vec![
            (ItemRef::new(1, 10), Rect::new(0.0, 0.0, 100.0, 30.0)),
            (ItemRef::new(2, 20), Rect::new(0.0, 100.0, 100.0, 30.0)),
        ];
        store.hover_item(Point::new(10.0, 10.0), rows);
        assert_eq!(store.drag().highlighted_item(), Some(ItemRef::new(2, 20)));

        assert_eq!(store.drop_item(None).unwrap(), Some(ItemRef::new(2, 20)));
        store.end_item_drag();

        let saved = stored_board(&store);
        assert!(saved.list(1).unwrap().is_empty());
        assert_eq!(saved.list(2).unwrap().item_ids(), vec![10, 20]);
        assert!(store.drag().is_idle());
    }

    #[test]
    fn test_new_ids_never_collide_with_loaded_ones() {
        let future = 9_000_000_000_000u64;
        let raw = format!(r#"[{{"id":{},"title":"Later","items":[]}}]"#, future);
        let mut store = ChecklistStore::open(MemoryStorage::with_value(DATA_KEY, &raw));
        store.dispatch(Command::AddList { title: Some("Next".to_string()) }).unwrap();
        store.dispatch(Command::AddList { title: Some("After".to_string()) }).unwrap();
        let ids: Vec<u64> = store.board().lists().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![future, future + 1, future + 2]);
    }

    #[test]
    fn test_add_after_largest_id_is_rejected() {
        let raw = format!(r#"[{{"id":{},"title":"Last","items":[]}}]"#, u64::MAX);
        let mut store = ChecklistStore::open(MemoryStorage::with_value(DATA_KEY, &raw));
        let before = store.board().clone();

        let result = store.dispatch(Command::AddList { title: Some("More".to_string()) });
        assert_eq!(result, Err(DomainError::IdsExhausted));
        let result = store.dispatch(Command::AddItem {
            list_id: u64::MAX,
            text: Some("More".to_string()),
        });
        assert_eq!(result, Err(DomainError::IdsExhausted));
        assert_eq!(store.board(), &before);
    }
}
