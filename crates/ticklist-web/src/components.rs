mod empty_state;
mod filter_bar;
mod new_task_input;
mod stats_panel;
mod todo_item;
mod todo_list;

pub use empty_state::EmptyStateBlock;
pub use filter_bar::FilterBar;
pub use new_task_input::NewTaskInput;
pub use stats_panel::StatsPanel;
pub use todo_item::TodoItem;
pub use todo_list::{
  TodoList,
  TodoRow
};
