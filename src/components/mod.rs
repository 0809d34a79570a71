//! UI Components
//!
//! Leptos components that apply a `TodoView` to the page.

mod new_todo_form;
mod filter_bar;
mod todo_list;
mod todo_item;
mod edit_input;
mod todo_footer;

pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use todo_list::TodoList;
pub use todo_item::TodoItem;
pub use edit_input::EditInput;
pub use todo_footer::TodoFooter;
