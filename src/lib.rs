//! # recipeshare
//!
//! A small recipe-sharing CRUD web service.
//!
//! [`RecipeStore`] owns the recipes and assigns ids. The [`server`] module
//! exposes it over HTTP under `/api/recipes`, and [`RecipeClient`] talks to
//! that API.
//!
//! ## Quick start
//!
//! ```
//! use recipeshare::{NewRecipe, RecipePatch, RecipeStore};
//!
//! let store = RecipeStore::new();
//! let pie = store.create(NewRecipe::new("Pie", "Apple pie", "Apples, Flour, Sugar", "Mix and bake"));
//! assert_eq!(pie.id, 1);
//!
//! let patched = store
//!     .patch(pie.id, RecipePatch::default().description("Apple pie (patched)"))
//!     .unwrap();
//! assert_eq!(patched.title, "Pie");
//!
//! assert!(store.delete(pie.id));
//! assert!(store.get(pie.id).is_none());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod store;

pub use client::RecipeClient;
pub use config::ServerConfig;
pub use error::{RecipeShareError, Result};
pub use model::{NewRecipe, Recipe, RecipePatch};
pub use store::RecipeStore;
