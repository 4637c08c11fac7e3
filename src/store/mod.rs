//! The animal store: entity list plus the "add animal" form.
//!
//! All changes go through [`reduce`], which takes the current [`StoreState`]
//! by reference and returns the next one. [`Store`] owns the live state and
//! swaps in the reducer's result, so a rejected action leaves nothing behind.

pub mod error;
pub mod model;

pub use error::StoreError;
pub use model::{Animal, AnimalId, AnimalType, FormState, UnsavedAnimal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    SetName(String),
    SetType(AnimalType),
    AddAnimal(UnsavedAnimal),
    IncreaseVotes(AnimalId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub animals: Vec<Animal>,
    pub form: FormState,
    /// Counter for the next assigned id. Ids are never reused.
    pub next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            animals: Vec::new(),
            form: FormState::default(),
            next_id: 1,
        }
    }
}

impl StoreState {
    /// Animals sorted by votes, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&Animal> {
        let mut sorted: Vec<&Animal> = self.animals.iter().collect();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted
    }

    pub fn animal(&self, id: &AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| &a.id == id)
    }

    pub fn total_votes(&self) -> u64 {
        self.animals.iter().map(|a| a.votes).sum()
    }
}

/// Compute the state that follows `action`.
pub fn reduce(state: &StoreState, action: StoreAction) -> Result<StoreState, StoreError> {
    let mut next = state.clone();
    match action {
        StoreAction::SetName(name) => {
            next.form.name = name;
        }
        StoreAction::SetType(kind) => {
            next.form.kind = kind;
        }
        StoreAction::AddAnimal(unsaved) => {
            let id = AnimalId::from(next.next_id);
            next.next_id += 1;
            next.animals.push(Animal {
                id,
                name: unsaved.name,
                kind: unsaved.kind,
                votes: 0,
            });
            next.form = FormState::default();
        }
        StoreAction::IncreaseVotes(id) => {
            let animal = next
                .animals
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(StoreError::UnknownAnimal(id))?;
            animal.votes = animal.votes.saturating_add(1);
        }
    }
    Ok(next)
}

/// Owner of the live [`StoreState`].
#[derive(Debug, Default)]
pub struct Store {
    state: StoreState,
    version: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`. On error the current state is kept as is.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<(), StoreError> {
        tracing::debug!(?action, "dispatch");
        self.state = reduce(&self.state, action)?;
        self.version += 1;
        Ok(())
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn animals(&self) -> &[Animal] {
        &self.state.animals
    }

    pub fn form(&self) -> &FormState {
        &self.state.form
    }

    pub fn ranked(&self) -> Vec<&Animal> {
        self.state.ranked()
    }

    pub fn animal(&self, id: &AnimalId) -> Option<&Animal> {
        self.state.animal(id)
    }

    /// Bumped once per successful dispatch.
    pub fn version(&self) -> u64 {
        self.version
    }
}
