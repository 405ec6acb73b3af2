pub mod config;
pub mod filter;
pub mod keyboard;
pub mod motion;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use config::AppConfig;
pub use filter::Filter;
pub use storage::{
  DataStore,
  KeyValueBackend,
  MemoryBackend,
  StorageKeys
};
pub use store::{
  ActionKind,
  LastAction,
  TaskStore
};
pub use task::Task;
pub use view::{
  EmptyState,
  ListView,
  Stats
};
