use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::model::{NewRecipe, Recipe, RecipePatch};

/// In-memory collection of recipes.
///
/// Ids start at 1 and grow by one per `create`; deleted ids are never handed
/// out again. Because ids only grow, iterating the id-keyed map yields
/// recipes in insertion order.
///
/// All mutations and id allocation go through one lock, so a store can be
/// shared between request handlers behind an `Arc`.
#[derive(Debug, Default)]
pub struct RecipeStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    recipes: BTreeMap<u64, Recipe>,
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No critical section can leave the map half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new recipe under the next unused id and returns it.
    pub fn create(&self, fields: NewRecipe) -> Recipe {
        let mut inner = self.lock();
        inner.last_id += 1;
        let recipe = fields.with_id(inner.last_id);
        inner.recipes.insert(recipe.id, recipe.clone());
        debug!("Created recipe {} ({:?})", recipe.id, recipe.title);
        recipe
    }

    /// All recipes, first-created first.
    pub fn list(&self) -> Vec<Recipe> {
        self.lock().recipes.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Recipe> {
        self.lock().recipes.get(&id).cloned()
    }

    /// Overwrites every field of recipe `id`, keeping its id.
    ///
    /// Returns `None` without touching the store when `id` is unknown.
    pub fn replace(&self, id: u64, fields: NewRecipe) -> Option<Recipe> {
        let mut inner = self.lock();
        let slot = inner.recipes.get_mut(&id)?;
        *slot = fields.with_id(id);
        debug!("Replaced recipe {}", id);
        Some(slot.clone())
    }

    /// Overwrites only the fields present in `patch`.
    ///
    /// Returns `None` without touching the store when `id` is unknown.
    pub fn patch(&self, id: u64, patch: RecipePatch) -> Option<Recipe> {
        let mut inner = self.lock();
        let slot = inner.recipes.get_mut(&id)?;
        patch.apply_to(slot);
        debug!("Patched recipe {}", id);
        Some(slot.clone())
    }

    /// Removes recipe `id`. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.lock().recipes.remove(&id).is_some();
        if removed {
            debug!("Deleted recipe {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn pie() -> NewRecipe {
        NewRecipe::new("Pie", "Apple pie", "Apples, Flour, Sugar", "Mix and bake")
    }

    fn soup() -> NewRecipe {
        NewRecipe::new("Soup", "Tomato soup", "Tomatoes, Water, Salt", "Boil and blend")
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecipeStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn test_create_assigns_ids_from_one() {
        let store = RecipeStore::new();
        let first = store.create(pie());
        let second = store.create(soup());

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.title, "Pie");
        assert_eq!(second.instructions, "Boil and blend");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = RecipeStore::new();
        let mut seen = Vec::new();
        for round in 0..5 {
            let recipe = store.create(pie());
            seen.push(recipe.id);
            if round % 2 == 0 {
                assert!(store.delete(recipe.id));
            }
        }

        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let store = RecipeStore::new();
        let titles = ["Cake", "Pasta Salad", "Pancakes", "Pie"];
        for title in titles {
            store.create(NewRecipe::new(title, "", "", ""));
        }

        let listed: Vec<String> = store.list().into_iter().map(|r| r.title).collect();
        assert_eq!(listed, titles);
    }

    #[test]
    fn test_get_returns_created_recipe() {
        let store = RecipeStore::new();
        let created = store.create(pie());
        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn test_delete_then_get_and_delete_again() {
        let store = RecipeStore::new();
        let created = store.create(pie());

        assert!(store.delete(created.id));
        assert_eq!(store.get(created.id), None);
        assert!(!store.delete(created.id));
    }

    #[test]
    fn test_replace_preserves_id_and_overwrites_fields() {
        let store = RecipeStore::new();
        let created = store.create(pie());
        let updated = NewRecipe::new(
            "Updated Pie",
            "New apple pie",
            "Apples, Flour, Sugar, Butter",
            "Mix and bake at 375F",
        );

        let replaced = store.replace(created.id, updated.clone()).unwrap();
        assert_eq!(replaced, updated.with_id(created.id));
        assert_eq!(store.get(created.id), Some(replaced));
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let store = RecipeStore::new();
        store.create(pie());
        let soup = store.create(soup());

        let patched = store
            .patch(
                soup.id,
                RecipePatch::default().description("Tomato soup (patched)"),
            )
            .unwrap();

        assert_eq!(patched.id, soup.id);
        assert_eq!(patched.title, "Soup");
        assert_eq!(patched.description, "Tomato soup (patched)");
        assert_eq!(patched.ingredients, "Tomatoes, Water, Salt");
        assert_eq!(patched.instructions, "Boil and blend");
    }

    #[test]
    fn test_unknown_id_is_absent_and_does_not_mutate() {
        let store = RecipeStore::new();
        let created = store.create(pie());
        let before = store.list();

        assert_eq!(store.get(9999), None);
        assert_eq!(store.replace(9999, soup()), None);
        assert_eq!(store.patch(9999, RecipePatch::default().title("Ghost")), None);
        assert!(!store.delete(9999));

        assert_eq!(store.list(), before);
        // The failed operations must not consume ids either.
        assert_eq!(store.create(soup()).id, created.id + 1);
    }

    #[test]
    fn test_example_scenario() {
        let store = RecipeStore::new();
        assert_eq!(store.create(pie()).id, 1);
        assert_eq!(store.create(soup()).id, 2);

        let titles: Vec<String> = store.list().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Pie", "Soup"]);

        assert!(store.delete(1));
        assert_eq!(store.get(1), None);
        assert!(!store.delete(1));

        let patched = store
            .patch(2, RecipePatch::default().description("Tomato soup (patched)"))
            .unwrap();
        assert_eq!(patched.title, "Soup");
        assert_eq!(patched.description, "Tomato soup (patched)");
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(RecipeStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50).map(|_| store.create(pie()).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&400));
    }
}
