//! Randomized sample-data generation for the seed operation.
//!
//! The generator plans a whole batch in memory; persistence stays in the
//! repository layer. Content is random but the shape is fixed: a friend gets
//! an address with probability one half, between 0 and 3 pets, and between
//! 0 and 5 favourite quotes drawn without replacement from the catalog.

pub mod catalog;

use std::collections::HashSet;

use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::FromRow;
use time::{Date, Month};
use uuid::Uuid;

use crate::models::{AnimalKind, AnimalMood};

const KINDS: [AnimalKind; 5] = [
    AnimalKind::Dog,
    AnimalKind::Cat,
    AnimalKind::Rabbit,
    AnimalKind::Fish,
    AnimalKind::Bird,
];

const MOODS: [AnimalMood; 5] = [
    AnimalMood::Happy,
    AnimalMood::Hungry,
    AnimalMood::Lazy,
    AnimalMood::Sleepy,
    AnimalMood::Grumpy,
];

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "outlook.com", "icloud.com", "proton.me"];

/// The comparable value fields of an address. Uniqueness during generation
/// is full-value equality over these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FromRow)]
pub struct AddressFields {
    pub street_address: String,
    pub zip_code: i32,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedFriend {
    pub friend_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: Option<Date>,
}

#[derive(Debug, Clone)]
pub struct GeneratedAddress {
    pub address_id: Uuid,
    pub fields: AddressFields,
}

#[derive(Debug, Clone)]
pub struct GeneratedPet {
    pub pet_id: Uuid,
    pub kind: AnimalKind,
    pub mood: AnimalMood,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedQuote {
    pub quote_id: Uuid,
    pub quote: String,
    pub author: String,
}

/// A friend together with its planned relations.
#[derive(Debug, Clone)]
pub struct PlannedFriend {
    pub friend: GeneratedFriend,
    pub address_id: Option<Uuid>,
    pub pets: Vec<GeneratedPet>,
    pub favorite_quote_ids: Vec<Uuid>,
}

/// The staged batch: everything the seed operation will insert.
///
/// `addresses` holds only the pool entries at least one friend ended up
/// assigned to; unassigned candidates are discarded and never counted.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub friends: Vec<PlannedFriend>,
    pub addresses: Vec<GeneratedAddress>,
}

impl SeedPlan {
    pub fn pet_count(&self) -> usize {
        self.friends.iter().map(|f| f.pets.len()).sum()
    }
}

/// Generates randomized, internally consistent sample entities.
///
/// Backed by an owned `StdRng` so a planning run can live inside async
/// repository calls; tests hand in a seeded rng for reproducible batches.
pub struct SeedGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SeedGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SeedGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SeedGenerator<R> {
    /// Creates a generator over a caller-supplied rng, for reproducible runs.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Wraps the full fixed quote catalog as insertable rows.
    pub fn quote_catalog(&self) -> Vec<GeneratedQuote> {
        catalog::QUOTES
            .iter()
            .map(|(quote, author)| GeneratedQuote {
                quote_id: Uuid::new_v4(),
                quote: (*quote).to_string(),
                author: (*author).to_string(),
            })
            .collect()
    }

    /// Plans a batch of `nr_of_items` friends with their relations.
    ///
    /// `existing_addresses` is the committed address catalog; generated
    /// addresses collide neither with it nor with each other. `quote_ids` is
    /// the quotes table as loaded after any catalog staging; favourites are
    /// drawn from it without replacement.
    pub fn plan(
        &mut self,
        nr_of_items: usize,
        existing_addresses: &[AddressFields],
        quote_ids: &[Uuid],
    ) -> SeedPlan {
        let pool = self.unique_addresses(nr_of_items, existing_addresses);
        let mut assigned: HashSet<Uuid> = HashSet::new();

        let mut friends = Vec::with_capacity(nr_of_items);
        for _ in 0..nr_of_items {
            let friend = self.friend();

            // Friends can live on the same address, or none at all.
            let address_id = if self.rng.gen_bool(0.5) {
                pool.choose(&mut self.rng).map(|a| a.address_id)
            } else {
                None
            };
            if let Some(id) = address_id {
                assigned.insert(id);
            }

            let pet_count = self.rng.gen_range(0..4);
            let pets = (0..pet_count).map(|_| self.pet()).collect();

            let favorite_count = self.rng.gen_range(0..6);
            let favorite_quote_ids = quote_ids
                .choose_multiple(&mut self.rng, favorite_count)
                .copied()
                .collect();

            friends.push(PlannedFriend {
                friend,
                address_id,
                pets,
                favorite_quote_ids,
            });
        }

        let addresses = pool
            .into_iter()
            .filter(|a| assigned.contains(&a.address_id))
            .collect();

        SeedPlan { friends, addresses }
    }

    fn friend(&mut self) -> GeneratedFriend {
        let first_name: String = FirstName().fake_with_rng(&mut self.rng);
        let last_name: String = LastName().fake_with_rng(&mut self.rng);
        let email = self.email(&first_name, &last_name);
        let birthday = if self.rng.gen_bool(0.5) {
            Some(self.birthday())
        } else {
            None
        };

        GeneratedFriend {
            friend_id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            birthday,
        }
    }

    fn email(&mut self, first: &str, last: &str) -> String {
        let user: String = format!("{}.{}", first.to_lowercase(), last.to_lowercase())
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '.')
            .collect();
        let domain = EMAIL_DOMAINS[self.rng.gen_range(0..EMAIL_DOMAINS.len())];
        format!("{user}@{domain}")
    }

    fn birthday(&mut self) -> Date {
        let year = self.rng.gen_range(1940..=2005);
        let month = MONTHS[self.rng.gen_range(0..MONTHS.len())];
        let day = self.rng.gen_range(1..=28);
        Date::from_calendar_date(year, month, day).expect("day 1..=28 exists in every month")
    }

    fn address(&mut self) -> AddressFields {
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        AddressFields {
            street_address: format!("{street} {}", self.rng.gen_range(1..100)),
            zip_code: self.rng.gen_range(10101..99999),
            city: CityName().fake_with_rng(&mut self.rng),
            country: catalog::COUNTRIES[self.rng.gen_range(0..catalog::COUNTRIES.len())]
                .to_string(),
        }
    }

    /// Produces `count` addresses unique by value against both the existing
    /// catalog and each other. Colliding candidates are discarded and redrawn.
    fn unique_addresses(
        &mut self,
        count: usize,
        existing: &[AddressFields],
    ) -> Vec<GeneratedAddress> {
        let mut seen: HashSet<AddressFields> = existing.iter().cloned().collect();
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let candidate = self.address();
            if seen.insert(candidate.clone()) {
                out.push(GeneratedAddress {
                    address_id: Uuid::new_v4(),
                    fields: candidate,
                });
            }
        }
        out
    }

    fn pet(&mut self) -> GeneratedPet {
        GeneratedPet {
            pet_id: Uuid::new_v4(),
            kind: KINDS[self.rng.gen_range(0..KINDS.len())],
            mood: MOODS[self.rng.gen_range(0..MOODS.len())],
            name: catalog::PET_NAMES[self.rng.gen_range(0..catalog::PET_NAMES.len())].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> SeedGenerator<StdRng> {
        SeedGenerator::with_rng(StdRng::seed_from_u64(12345))
    }

    fn quote_ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn plan_produces_requested_friend_count() {
        let mut generator = generator();
        let quotes = quote_ids(30);
        let plan = generator.plan(25, &[], &quotes);

        assert_eq!(plan.friends.len(), 25);
        assert!(plan.addresses.len() <= 25);
        assert!(plan.pet_count() <= 25 * 3);
    }

    #[test]
    fn plan_with_zero_items_is_empty() {
        let mut generator = generator();
        let quotes = quote_ids(30);
        let plan = generator.plan(0, &[], &quotes);

        assert!(plan.friends.is_empty());
        assert!(plan.addresses.is_empty());
    }

    #[test]
    fn pets_stay_within_bounds_and_are_exclusively_owned() {
        let mut generator = generator();
        let quotes = quote_ids(30);
        let plan = generator.plan(50, &[], &quotes);

        let mut pet_ids = HashSet::new();
        for planned in &plan.friends {
            assert!(planned.pets.len() <= 3);
            for pet in &planned.pets {
                // Each pet id appears under exactly one friend.
                assert!(pet_ids.insert(pet.pet_id));
            }
        }
    }

    #[test]
    fn favorites_are_distinct_and_from_the_catalog() {
        let mut generator = generator();
        let quotes = quote_ids(30);
        let catalog: HashSet<Uuid> = quotes.iter().copied().collect();
        let plan = generator.plan(50, &[], &quotes);

        for planned in &plan.friends {
            assert!(planned.favorite_quote_ids.len() <= 5);
            let distinct: HashSet<Uuid> = planned.favorite_quote_ids.iter().copied().collect();
            assert_eq!(distinct.len(), planned.favorite_quote_ids.len());
            assert!(distinct.is_subset(&catalog));
        }
    }

    #[test]
    fn favorites_never_exceed_a_small_catalog() {
        let mut generator = generator();
        let quotes = quote_ids(2);
        let plan = generator.plan(20, &[], &quotes);

        for planned in &plan.friends {
            assert!(planned.favorite_quote_ids.len() <= 2);
        }
    }

    #[test]
    fn generated_addresses_are_unique_by_value() {
        let mut generator = generator();
        let existing = vec![AddressFields {
            street_address: "Storgatan 1".to_string(),
            zip_code: 11122,
            city: "Stockholm".to_string(),
            country: "Sweden".to_string(),
        }];
        let pool = generator.unique_addresses(100, &existing);

        assert_eq!(pool.len(), 100);
        let mut values: HashSet<AddressFields> = existing.into_iter().collect();
        for address in &pool {
            assert!(values.insert(address.fields.clone()));
        }
    }

    #[test]
    fn only_assigned_addresses_survive_the_plan() {
        let mut generator = generator();
        let quotes = quote_ids(30);
        let plan = generator.plan(40, &[], &quotes);

        let kept: HashSet<Uuid> = plan.addresses.iter().map(|a| a.address_id).collect();
        let assigned: HashSet<Uuid> =
            plan.friends.iter().filter_map(|f| f.address_id).collect();
        assert_eq!(kept, assigned);
    }

    #[test]
    fn quote_catalog_wraps_every_fixed_quote() {
        let generator = generator();
        let rows = generator.quote_catalog();

        assert_eq!(rows.len(), catalog::QUOTES.len());
        let distinct: HashSet<&str> = rows.iter().map(|q| q.quote.as_str()).collect();
        assert_eq!(distinct.len(), rows.len());
    }
}
