//! UI Components
//!
//! Leptos components for both pages.

mod page_tab_bar;
mod member_roster;
mod member_row;
mod member_edit_form;
mod todo_page;
mod new_todo_form;
mod filter_bar;
mod todo_row;

pub use page_tab_bar::{Page, PageTabBar};
pub use member_roster::MemberRoster;
pub use member_row::MemberRow;
pub use member_edit_form::MemberEditForm;
pub use todo_page::TodoPage;
pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use todo_row::TodoRow;
