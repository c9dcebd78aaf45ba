//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location
    pub api: ApiConfig,
    /// Bumped to refetch the roster - read
    pub members_reload: ReadSignal<u32>,
    /// Bumped to refetch the roster - write
    set_members_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: ApiConfig, members_reload: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            api,
            members_reload: members_reload.0,
            set_members_reload: members_reload.1,
        }
    }

    /// Trigger a refetch of the roster
    pub fn reload_members(&self) {
        self.set_members_reload.update(|v| *v += 1);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
