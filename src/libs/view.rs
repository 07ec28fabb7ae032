use super::formatter::format_updated_at;
use super::task::Listing;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task table for a listing.
    ///
    /// The description column is padded to `listing.description_width`, so
    /// it never shrinks below the longest description in the whole task
    /// file, even when only a filtered subset is shown.
    pub fn tasks(listing: &Listing) -> Table {
        let width = listing.description_width;
        let mut table = Table::new();

        table.set_titles(row!["ID", format!("{:<width$}", "Description"), "Status", "Created At", "Updated At"]);
        for task in &listing.tasks {
            table.add_row(row![
                task.id,
                format!("{:<width$}", task.description),
                task.status,
                task.created_at,
                format_updated_at(task.updated_at.as_deref())
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{Status, Task};

    fn listing(tasks: Vec<Task>, description_width: usize) -> Listing {
        Listing {
            tasks,
            description_width,
        }
    }

    #[test]
    fn renders_header_for_empty_listing() {
        let rendered = View::tasks(&listing(vec![], 0)).to_string();

        for title in ["ID", "Description", "Status", "Created At", "Updated At"] {
            assert!(rendered.contains(title), "missing column {title}");
        }
    }

    #[test]
    fn shows_placeholder_for_tasks_never_updated() {
        let mut done = Task::new(2, "Pay rent", "01-01-2025 09:00:00");
        done.status = Status::Done;
        done.updated_at = Some("02-01-2025 10:00:00".to_string());
        let tasks = vec![Task::new(1, "Walk dog", "01-01-2025 08:00:00"), done];

        let rendered = View::tasks(&listing(tasks, 8)).to_string();

        assert!(rendered.contains("No Update"));
        assert!(rendered.contains("02-01-2025 10:00:00"));
        assert!(rendered.contains("done"));
    }

    #[test]
    fn pads_description_to_listing_width() {
        let tasks = vec![Task::new(1, "a", "01-01-2025 08:00:00")];

        let narrow = View::tasks(&listing(tasks.clone(), 1)).to_string();
        let wide = View::tasks(&listing(tasks, 40)).to_string();

        let first_line = |s: &str| s.lines().next().unwrap().chars().count();
        assert_eq!(first_line(&wide) - first_line(&narrow), 40 - "Description".len());
    }
}
