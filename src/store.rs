use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

use crate::error::todo::TodoError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub url: String,
    pub order: Option<i64>,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct PatchTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug)]
enum Command {
    Create(NewTodo, oneshot::Sender<Todo>),
    Clear(oneshot::Sender<()>),
    Delete(Uuid, oneshot::Sender<()>),
    Get(Uuid, oneshot::Sender<Option<Todo>>),
    List(oneshot::Sender<Vec<Todo>>),
    Update(Uuid, PatchTodo, oneshot::Sender<Option<Todo>>),
}

/// Handle to the todo map. All reads and writes go through one worker task,
/// so operations never interleave; clones share the same worker.
#[derive(Debug, Clone)]
pub struct TodoStore {
    tx: mpsc::UnboundedSender<Command>,
}

impl TodoStore {
    pub fn spawn(base_url: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = TodoWorker { base_url: base_url.into(), todos: HashMap::new(), rx };
        tokio::spawn(worker.run());
        Self { tx }
    }

    pub async fn create(&self, new: NewTodo) -> Result<Todo, TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::Create(new, tx), rx).await
    }

    pub async fn clear(&self) -> Result<(), TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::Clear(tx), rx).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::Delete(id, tx), rx).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Todo>, TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::Get(id, tx), rx).await
    }

    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::List(tx), rx).await
    }

    pub async fn update(&self, id: Uuid, patch: PatchTodo) -> Result<Todo, TodoError> {
        let (tx, rx) = oneshot::channel();
        self.request(Command::Update(id, patch, tx), rx).await?.ok_or(TodoError::NotFound(id))
    }

    async fn request<T>(&self, command: Command, rx: oneshot::Receiver<T>) -> Result<T, TodoError> {
        self.tx.send(command).map_err(|_| TodoError::Unavailable)?;
        rx.await.map_err(|_| TodoError::Unavailable)
    }
}

struct TodoWorker {
    base_url: String,
    todos: HashMap<Uuid, Todo>,
    rx: mpsc::UnboundedReceiver<Command>,
}

impl TodoWorker {
    async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            self.handle(command);
        }
        tracing::debug!("all store handles dropped, stop worker");
    }

    // replies are allowed to fail: the caller may have gone away
    fn handle(&mut self, command: Command) {
        match command {
            Command::Create(new, tx) => {
                let _ = tx.send(self.create(new));
            }
            Command::Clear(tx) => {
                self.todos.clear();
                let _ = tx.send(());
            }
            Command::Delete(id, tx) => {
                self.todos.remove(&id);
                let _ = tx.send(());
            }
            Command::Get(id, tx) => {
                let _ = tx.send(self.todos.get(&id).cloned());
            }
            Command::List(tx) => {
                let _ = tx.send(self.todos.values().cloned().collect());
            }
            Command::Update(id, patch, tx) => {
                let _ = tx.send(self.update(id, patch));
            }
        }
    }

    fn create(&mut self, NewTodo { title, order }: NewTodo) -> Todo {
        let id = Uuid::new_v4();
        let url = format!("{}/{}", self.base_url, id);
        let todo = Todo { id, url, order, title, completed: false };
        self.todos.insert(id, todo.clone());
        todo
    }

    fn update(&mut self, id: Uuid, patch: PatchTodo) -> Option<Todo> {
        let todo = self.todos.get_mut(&id)?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(order) = patch.order {
            todo.order = Some(order);
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }
}
