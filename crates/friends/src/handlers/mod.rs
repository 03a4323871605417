//! HTTP request handlers for the friends API.
//!
//! One module per entity kind plus the admin operations; `params` holds the
//! shared string-typed query conversion.

pub mod params;

pub mod addresses;
pub mod admin;
pub mod friends;
pub mod health;
pub mod pets;
pub mod quotes;

pub use addresses::{
    create_address, delete_address, read_address, read_address_dto, read_addresses, update_address,
};
pub use admin::{info, remove_seed, seed};
pub use friends::{
    create_friend, delete_friend, read_friend, read_friend_dto, read_friends, update_friend,
};
pub use health::health_check;
pub use pets::{create_pet, delete_pet, read_pet, read_pet_dto, read_pets, update_pet};
pub use quotes::{create_quote, delete_quote, read_quote, read_quote_dto, read_quotes, update_quote};
