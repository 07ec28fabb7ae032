#[cfg(test)]
mod tests {
    use task_cli::db::storage::MemoryStorage;
    use task_cli::db::tasks::TaskStore;
    use task_cli::libs::task::{Outcome, Status};
    use task_cli::libs::view::View;

    #[test]
    fn test_task_lifecycle() {
        let mut store = TaskStore::new(MemoryStorage::new());

        // add
        let task = store.add("Buy milk").unwrap();
        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].description, "Buy milk");
        assert_eq!(tasks[0].status, Status::Todo);
        assert_eq!(tasks[0].updated_at, None);

        // mark done
        assert!(matches!(store.mark(task.id, Status::Done).unwrap(), Outcome::Marked(_)));
        let done = store.load().remove(0);
        assert_eq!(done.status, Status::Done);
        assert!(done.updated_at.is_some());

        // update is refused once done
        assert_eq!(store.update(task.id, "Buy oat milk").unwrap(), Outcome::AlreadyDone(1));
        assert_eq!(store.load()[0], done);

        // delete
        assert!(matches!(store.delete(task.id).unwrap(), Outcome::Deleted(_)));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_reopened_task_can_be_updated() {
        let mut store = TaskStore::new(MemoryStorage::new());
        let task = store.add("Draft post").unwrap();
        store.mark(task.id, Status::Done).unwrap();

        store.mark(task.id, Status::InProgress).unwrap();
        let outcome = store.update(task.id, "Publish post").unwrap();

        assert!(matches!(outcome, Outcome::Updated(ref t) if t.description == "Publish post"));
    }

    #[test]
    fn test_filtered_table_keeps_full_width() {
        let mut store = TaskStore::new(MemoryStorage::new());
        store.add("Short").unwrap();
        store.add("A considerably longer description").unwrap();
        store.mark(1, Status::InProgress).unwrap();
        store.mark(2, Status::Done).unwrap();

        let full = View::tasks(&store.list(None)).to_string();
        let filtered = View::tasks(&store.list(Some(Status::InProgress))).to_string();

        assert_eq!(full.lines().next(), filtered.lines().next());
        assert!(!filtered.contains("considerably"));
    }
}
