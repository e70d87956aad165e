//! Basic ShelfDB Example - Todo Application
//!
//! This example demonstrates core ShelfDB functionality:
//! - Opening a database
//! - Defining entities with serde derive
//! - Appending, updating and removing records
//! - Explicit write-back and reload
//! - Filtering using native Rust iterators
//!
//! Run with: cargo run -p rust_todo

use serde::{Deserialize, Serialize};
use shelfdb_core::{Database, Entity, EntityId};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

/// A simple Todo item entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Todo {
    id: EntityId,
    title: String,
    completed: bool,
    priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due: Option<String>,
    created_at: u64,
}

impl Todo {
    /// Creates a new Todo with a generated ID.
    fn new(title: &str, priority: u8) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            id: EntityId::new(),
            title: title.to_string(),
            completed: false,
            priority,
            due: None,
            created_at: now,
        }
    }

    /// Creates a copy with completed set to true.
    fn complete(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }
}

impl Entity for Todo {
    const NAME: &'static str = "todos";

    fn entity_id(&self) -> EntityId {
        self.id
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Todo Application Example");
    println!("========================\n");

    // Open a database in a scratch directory
    let scratch = tempfile::tempdir()?;
    let db = Database::open(scratch.path().join("todo_db")).await?;
    println!("[OK] Database opened at {:?}", db.path());

    // Get the todos collection (creates todos.json on first use)
    let mut todos = db.collection::<Todo>().await?;

    // Create some todos
    todos.append(vec![
        Todo::new("Learn ShelfDB", 1),
        Todo::new("Build an app", 2),
        Todo {
            due: Some("2026-09-01".to_string()),
            ..Todo::new("Write tests", 1)
        },
        Todo::new("Deploy to production", 3),
    ]);
    println!("\n[+] Staged {} todos in memory", todos.len());

    // Nothing is on disk until an explicit write
    todos.write().await?;
    println!("[OK] Todos written to {:?}", todos.path());

    // Reload from disk and list
    let all = db.collection::<Todo>().await?;
    println!("\n[*] All todos:");
    all.for_each(|todo| {
        let status = if todo.completed { "x" } else { " " };
        println!("  [{status}] (P{}) {}", todo.priority, todo.title);
    });

    // Filter incomplete high-priority todos using native Rust iterators
    println!("\n[!] High-priority incomplete todos:");
    for todo in all.iter().filter(|t| !t.completed && t.priority == 1) {
        println!("  [ ] {}", todo.title);
    }

    // Update a todo in place
    println!("\n[~] Completing 'Learn ShelfDB'...");
    if let Some(target) = all.iter().find(|t| t.title == "Learn ShelfDB") {
        let updated = target.clone().complete();
        todos.update(updated.id, updated);
    }
    todos.write().await?;

    // Count completed vs incomplete
    let reloaded = db.collection::<Todo>().await?;
    let completed: Vec<&Todo> = reloaded.iter().filter(|t| t.completed).collect();
    println!("\n[#] Summary:");
    println!("  Completed: {}", completed.len());
    println!("  Incomplete: {}", reloaded.len() - completed.len());

    // Remove completed todos and persist
    todos.remove_where(|t| t.completed);
    todos.write().await?;

    let remaining = db.collection::<Todo>().await?;
    println!("\n[-] Remaining after cleanup: {}", remaining.len());

    // Snapshot the collection file, then purge it
    if let Some(copy) = db.copy_collection(Todo::NAME).await? {
        println!("\n[=] Snapshot saved as {:?}", copy.file_name().unwrap());
    }
    db.purge(Todo::NAME).await?;
    println!("[*] Collection purged; file remains, now empty");

    Ok(())
}
