//! Animals Data

use crate::domain::animals::records::AnimalUuid;

/// New Animal Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnimal {
    pub uuid: AnimalUuid,
    pub name: String,
    pub breed: String,
    pub price: u64,
}

/// Animal Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalUpdate {
    pub name: String,
    pub breed: String,
    pub price: u64,
    pub available: bool,
}
