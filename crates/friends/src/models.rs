use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use utoipa::ToSchema;
use uuid::Uuid;

/// Read-only projection of a friend.
///
/// The relation fields stay `None` on flat reads. On non-flat reads they are
/// populated exactly one level deep: the nested rows never carry their own
/// relations, so cyclic back-references cannot expand.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub friend_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub birthday: Option<Date>,
    pub seeded: bool,
    pub address_id: Option<Uuid>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets: Option<Vec<Pet>>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,
}

/// Read-only projection of an address. Several friends may live at one.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: Uuid,
    pub street_address: String,
    pub zip_code: i32,
    pub city: String,
    pub country: String,
    pub seeded: bool,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Friend>>,
}

/// Read-only projection of a pet. Owned by exactly one friend.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub pet_id: Uuid,
    pub friend_id: Uuid,
    pub kind: AnimalKind,
    pub mood: AnimalMood,
    pub name: String,
    pub seeded: bool,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend: Option<Friend>,
}

/// Read-only projection of a quote, shared across friends.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: Uuid,
    pub quote: String,
    pub author: String,
    pub seeded: bool,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Friend>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "animal_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Dog,
    Cat,
    Rabbit,
    Fish,
    Bird,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "animal_mood", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnimalMood {
    Happy,
    Hungry,
    Lazy,
    Sleepy,
    Grumpy,
}

/// Create/update payload for a friend. Relations are passed as id lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendCuDto {
    pub friend_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub birthday: Option<Date>,
    pub address_id: Option<Uuid>,
    #[serde(default)]
    pub pets_id: Vec<Uuid>,
    #[serde(default)]
    pub quotes_id: Vec<Uuid>,
}

/// Create/update payload for an address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressCuDto {
    pub address_id: Option<Uuid>,
    pub street_address: String,
    pub zip_code: i32,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub friends_id: Vec<Uuid>,
}

/// Create/update payload for a pet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetCuDto {
    pub pet_id: Option<Uuid>,
    pub friend_id: Uuid,
    pub kind: AnimalKind,
    pub mood: AnimalMood,
    pub name: String,
}

/// Create/update payload for a quote.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCuDto {
    pub quote_id: Option<Uuid>,
    pub quote: String,
    pub author: String,
}

/// Caller identity forwarded to every repository call.
///
/// Nothing is enforced yet; the session travels with the call so a login
/// service can start filling it without touching the repository signatures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub role: Option<String>,
}

/// Count breakdown returned by the seed and removeseed operations.
///
/// Only the group matching the requested flag is filled; the other group
/// stays at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    pub nr_seeded_friends: i64,
    pub nr_seeded_addresses: i64,
    pub nr_seeded_pets: i64,
    pub nr_seeded_quotes: i64,
    pub nr_unseeded_friends: i64,
    pub nr_unseeded_addresses: i64,
    pub nr_unseeded_pets: i64,
    pub nr_unseeded_quotes: i64,
}

/// Database-wide counters, computable at any time without mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DbInfo {
    pub nr_seeded_friends: i64,
    pub nr_unseeded_friends: i64,
    pub nr_friends_with_address: i64,
    pub nr_seeded_addresses: i64,
    pub nr_unseeded_addresses: i64,
    pub nr_seeded_pets: i64,
    pub nr_unseeded_pets: i64,
    pub nr_seeded_quotes: i64,
    pub nr_unseeded_quotes: i64,
}

/// Envelope for the info endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub db: DbInfo,
}
