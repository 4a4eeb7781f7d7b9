//! Test Helpers

use crate::{
    auth::models::{NewUser, UserRole, UserUuid},
    domain::{
        animals::{data::NewAnimal, records::AnimalUuid},
        carts::{data::NewCartItem, records::CartItemUuid},
    },
};

pub(crate) fn new_user(email: &str, role: UserRole) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        email: email.to_string(),
        password: "password123".to_string(),
        first_name: "Test".to_string(),
        last_name: "Account".to_string(),
        role,
        phone: None,
        address: None,
    }
}

pub(crate) fn new_animal(name: &str, breed: &str, price: u64) -> NewAnimal {
    NewAnimal {
        uuid: AnimalUuid::new(),
        name: name.to_string(),
        breed: breed.to_string(),
        price,
    }
}

pub(crate) fn new_cart_item(animal: AnimalUuid, quantity: u32) -> NewCartItem {
    NewCartItem {
        uuid: CartItemUuid::new(),
        animal_uuid: animal,
        quantity,
    }
}
