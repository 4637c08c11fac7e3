use super::model::AnimalId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A vote targeted an id that is not in the list.
    #[error("no animal with id {0}")]
    UnknownAnimal(AnimalId),

    #[error("unknown animal type: {0:?}")]
    UnknownAnimalType(String),
}
