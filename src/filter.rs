//! Todo Filtering
//!
//! Which todos the list shows for the selected filter.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TodoFilter {
    /// Filter buttons in display order
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Completed, TodoFilter::Pending];

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "Todas",
            TodoFilter::Completed => "Completadas",
            TodoFilter::Pending => "Pendientes",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Completed => todo.completed,
            TodoFilter::Pending => !todo.completed,
        }
    }
}

/// Todos visible under `filter`, in list order
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            text: format!("Tarea {}", id),
            completed,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_todos() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        assert_eq!(ids(&filter_todos(&todos, TodoFilter::All)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_todos(&todos, TodoFilter::Completed)), vec![2, 4]);
        assert_eq!(ids(&filter_todos(&todos, TodoFilter::Pending)), vec![1, 3]);
    }

    #[test]
    fn test_default_filter_shows_everything() {
        assert_eq!(TodoFilter::default(), TodoFilter::All);
        assert!(filter_todos(&[], TodoFilter::Completed).is_empty());
    }

    #[test]
    fn test_labels_in_button_order() {
        let labels: Vec<_> = TodoFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Todas", "Completadas", "Pendientes"]);
    }
}
