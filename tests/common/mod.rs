//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tempfile::TempDir;

/// Atuin's `history` table as created by its first migration
pub const ATUIN_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS history (
    id text primary key,
    timestamp integer not null,
    duration integer not null,
    exit integer not null,
    command text not null,
    cwd text not null,
    session text not null,
    hostname text not null,
    deleted_at integer,
    unique(timestamp, cwd, command)
)";

/// Builder for a fake home directory holding an Atuin history database
pub struct HistoryDbBuilder {
    temp_dir: TempDir,
    relative_path: PathBuf,
    entries: Vec<HistoryRowBuilder>,
}

impl HistoryDbBuilder {
    /// Database at the XDG default location, `~/.local/share/atuin/history.db`
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            relative_path: PathBuf::from(".local/share/atuin/history.db"),
            entries: Vec::new(),
        }
    }

    /// Place the database somewhere else under the fake home
    pub fn at(mut self, relative_path: &str) -> Self {
        self.relative_path = PathBuf::from(relative_path);
        self
    }

    /// Add one row per command, all live
    pub fn with_commands(mut self, commands: &[&str]) -> Self {
        for command in commands {
            self.entries.push(HistoryRowBuilder::new(command));
        }
        self
    }

    /// Add a row built explicitly
    pub fn with_row(mut self, row: HistoryRowBuilder) -> Self {
        self.entries.push(row);
        self
    }

    /// Write the database and return the fake home
    pub fn build(self) -> FakeHome {
        let db_path = self.temp_dir.path().join(&self.relative_path);
        fs::create_dir_all(db_path.parent().expect("db path has a parent"))
            .expect("Failed to create atuin dir");

        let mut conn = Connection::open(&db_path).expect("Failed to create history.db");
        conn.execute_batch(ATUIN_SCHEMA).expect("Failed to create history table");
        let tx = conn.transaction().expect("Failed to begin transaction");
        for (i, entry) in self.entries.iter().enumerate() {
            entry.insert(&tx, i);
        }
        tx.commit().expect("Failed to commit history rows");

        FakeHome { temp_dir: self.temp_dir, db_path }
    }
}

impl Default for HistoryDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one row of the `history` table
pub struct HistoryRowBuilder {
    command: String,
    cwd: String,
    exit: i64,
    deleted_at: Option<i64>,
}

impl HistoryRowBuilder {
    pub fn new(command: &str) -> Self {
        Self { command: command.to_string(), cwd: "/home/test".to_string(), exit: 0, deleted_at: None }
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    pub fn exit(mut self, exit: i64) -> Self {
        self.exit = exit;
        self
    }

    /// Mark the row as deleted at the given timestamp
    pub fn deleted(mut self, deleted_at: i64) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    fn insert(&self, conn: &Connection, seq: usize) {
        // Distinct timestamps keep unique(timestamp, cwd, command) satisfied
        let timestamp = 1_700_000_000_000_000_000_i64 + seq as i64;
        conn.execute(
            "INSERT INTO history (id, timestamp, duration, exit, command, cwd, session, hostname, deleted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                format!("{:032x}", seq),
                timestamp,
                1_500_000_i64,
                self.exit,
                self.command,
                self.cwd,
                "0190b8a6c0ce7d3a9b5e5a2f6f0e3c11",
                "testbox:tester",
                self.deleted_at,
            ],
        )
        .expect("Failed to insert history row");
    }
}

/// A temporary home directory containing a history database
pub struct FakeHome {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl FakeHome {
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// A realistic history: mostly git, some aliases, a little noise
pub fn realistic_history() -> FakeHome {
    HistoryDbBuilder::new()
        .with_commands(&[
            "git status",
            "gs",
            "gs --short",
            "git commit -m 'wip'",
            "ll",
            "ls -la",
            "cd ~/src",
            "cd ..",
            "k get pods",
            "k get svc",
            "cargo test",
            "cargo test --release",
            "vim src/main.rs",
        ])
        .with_row(HistoryRowBuilder::new("git push").exit(1))
        .with_row(HistoryRowBuilder::new("gs").deleted(1_700_000_000_500_000_000))
        .build()
}

/// Alias listing matching [`realistic_history`], in zsh's `alias` format
pub const REALISTIC_ALIASES: &str = "gs='git status'\nll='ls -la'\nk=kubectl\n";
