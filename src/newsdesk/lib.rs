//! # Newsdesk Architecture
//!
//! Newsdesk is the publishing core of a small local news site: reporters write
//! articles (headline, byline, category, optional photo, rich-text body), the
//! articles are kept in one durable key-value slot, and the homepage and the
//! article reader are rendered from whatever that slot holds.
//!
//! Like any library with a CLI on top, everything below `api.rs` is free of
//! terminal assumptions: it takes Rust values and returns Rust values.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Collects the authoring form from flags, stages images    │
//! │  - Prints messages and writes generated pages               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the session's ArticleStore                          │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Commands (commands/*.rs)    │─▶│  Rendering (render/)     │
//! │  - publish, list, view,      │  │  - escaping, excerpts    │
//! │    home, site, config        │  │  - hero / card / modal   │
//! └──────────────────────────────┘  └──────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ArticleStore: newest-first collection, load / append     │
//! │  - Slot trait: FileSlot (production), MemorySlot (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Authoring is one-way: an [`model::ArticleDraft`] is validated, turned into
//! an [`model::Article`], appended to the store and persisted. Rendering
//! always reloads the slot first and never writes back.
//!
//! ## Trust Model
//!
//! Headlines, names, captions and excerpts are escaped everywhere. The article
//! body is rich text written in this tool by its local author and is inserted
//! into the reader view as-is.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Durable slot abstraction and the article store
//! - [`render`]: HTML views and text helpers
//! - [`model`]: `Article`, `ArticleDraft`, `Category`
//! - [`image`]: Image files to inline data URLs
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod render;
pub mod store;
