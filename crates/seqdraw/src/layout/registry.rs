//! Actor registry for the collection pass.

use indexmap::IndexMap;
use log::warn;

/// A declared actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    index: usize,
    label: String,
}

impl Actor {
    /// The column this actor's lifeline and arrows are placed at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The text drawn in the actor's box.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Declared actors keyed by name, in first-declaration order.
///
/// # Redeclaration
///
/// Declaring a name that is already registered keeps the name's original
/// position in iteration order (its box is drawn where it was first declared)
/// and replaces its label, but assigns it a new column index equal to the
/// registry size at the time of the redeclaration. Lifelines and arrow
/// endpoints follow the index, so they can end up under a different box, or
/// beyond the last one. Diagrams that rely on redeclaration render exactly
/// this way; a warning is logged each time it happens.
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    actors: IndexMap<String, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with `label`, returning the column index it was given.
    pub fn register(&mut self, name: &str, label: &str) -> usize {
        let index = self.actors.len();
        let actor = Actor {
            index,
            label: label.to_string(),
        };

        if let Some(previous) = self.actors.insert(name.to_string(), actor) {
            warn!(
                actor = name,
                previous_index = previous.index(),
                index;
                "Actor redeclared, its column index no longer matches its box"
            );
        }

        index
    }

    pub fn get(&self, name: &str) -> Option<&Actor> {
        self.actors.get(name)
    }

    /// Number of distinct actor names.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actors in first-declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Actor)> {
        self.actors.iter().map(|(name, actor)| (name.as_str(), actor))
    }
}
