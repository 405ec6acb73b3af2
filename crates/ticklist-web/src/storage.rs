use anyhow::anyhow;
use ticklist_core::{
  AppConfig,
  DataStore,
  KeyValueBackend,
  StorageKeys,
  TaskStore
};

/// `window.localStorage`, looked up on every access so a storage that
/// becomes unavailable only fails the individual read or write.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct LocalStorage;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "localStorage access denied: \
         {error:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!("localStorage unavailable")
    })
}

impl KeyValueBackend for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?.get_item(key).map_err(
      |error| {
        anyhow!(
          "failed reading {key}: \
           {error:?}"
        )
      }
    )
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "failed writing {key}: \
           {error:?}"
        )
      })
  }
}

fn current_pathname() -> Option<String> {
  web_sys::window().and_then(|window| {
    window.location().pathname().ok()
  })
}

pub fn open_task_store(
  config: &AppConfig
) -> TaskStore<LocalStorage> {
  let keys = StorageKeys::for_pathname(
    &config.storage.prefix,
    current_pathname().as_deref()
  );

  TaskStore::open(DataStore::new(
    LocalStorage,
    keys
  ))
}
