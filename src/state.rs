use crate::{env::Env, store::TodoStore};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Env,
    pub todos: TodoStore,
}

impl AppState {
    /// Spawns the store worker, so this must run inside a tokio runtime.
    pub fn new(env: Env) -> Self {
        let todos = TodoStore::spawn(env.base_url());
        Self { env, todos }
    }
}
impl Default for AppState {
    fn default() -> Self {
        Self::new(Env::default())
    }
}
