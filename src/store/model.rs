//! Data types held by the store.

use super::error::StoreError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of animal types offered by the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimalType {
    #[default]
    Bear,
    Tiger,
    Camel,
}

impl AnimalType {
    /// All types in selector order.
    pub const ALL: [AnimalType; 3] = [AnimalType::Bear, AnimalType::Tiger, AnimalType::Camel];

    /// Value as stored and echoed by the checker (`bear`).
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalType::Bear => "bear",
            AnimalType::Tiger => "tiger",
            AnimalType::Camel => "camel",
        }
    }

    /// Option label shown in the selector (`Bear`).
    pub fn label(self) -> &'static str {
        match self {
            AnimalType::Bear => "Bear",
            AnimalType::Tiger => "Tiger",
            AnimalType::Camel => "Camel",
        }
    }

    pub fn index(self) -> usize {
        match self {
            AnimalType::Bear => 0,
            AnimalType::Tiger => 1,
            AnimalType::Camel => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        AnimalType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| StoreError::UnknownAnimalType(s.to_string()))
    }
}

/// Identifier assigned by the store when an animal is added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(String);

impl AnimalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u64> for AnimalId {
    fn from(n: u64) -> Self {
        Self::new(n.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub kind: AnimalType,
    pub votes: u64,
}

/// An animal as entered in the form, before it has an id or votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedAnimal {
    pub name: String,
    pub kind: AnimalType,
}

impl UnsavedAnimal {
    pub fn new(name: impl Into<String>, kind: AnimalType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Editable fields of the "add animal" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub kind: AnimalType,
}

impl FormState {
    /// Snapshot of the form as an animal ready to be added.
    pub fn to_unsaved(&self) -> UnsavedAnimal {
        UnsavedAnimal::new(self.name.clone(), self.kind)
    }
}
