//! End-to-end repository test: seed, read flat and non-flat, reset.
//!
//! To run this test you need:
//! 1. A PostgreSQL database with the migrations applied
//! 2. DATABASE_URL environment variable set
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p friends seed`
//!
//! The test removes seeded rows before and after itself, so it can run
//! against a development database; unseeded rows are left untouched.

use std::collections::HashSet;
use std::env;

use friends::database::Database;
use friends::models::UserSession;
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

/// Get database pool, skipping the test if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

#[tokio::test]
async fn seed_read_reset_roundtrip() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let db = Database::new(pool);
    let usr = UserSession::default();

    // Start from a clean seeded state.
    db.remove_seed(&usr, true).await.expect("initial reset");

    let seeded = db.seed(&usr, 5).await.expect("seed");
    assert_eq!(seeded.nr_seeded_friends, 5);
    assert!(seeded.nr_seeded_addresses <= 5);
    assert!(seeded.nr_seeded_pets <= 15);
    // First seed on an empty catalog inserts the quote pool.
    assert!(seeded.nr_seeded_quotes > 0);

    let info = db.info().await.expect("info");
    assert_eq!(info.db.nr_seeded_friends, 5);
    assert_eq!(info.db.nr_seeded_addresses, seeded.nr_seeded_addresses);
    assert_eq!(info.db.nr_seeded_pets, seeded.nr_seeded_pets);
    assert_eq!(info.db.nr_seeded_quotes, seeded.nr_seeded_quotes);
    let unseeded_friends_before = info.db.nr_unseeded_friends;

    // A second seed call must not regenerate the quote catalog.
    let again = db.seed(&usr, 0).await.expect("second seed");
    assert_eq!(again.nr_seeded_friends, 0);
    assert_eq!(again.nr_seeded_quotes, 0);

    // Flat read: bare rows, no relations populated.
    let args = friends::handlers::params::ReadQuery::default()
        .parse()
        .expect("defaults parse");
    let flat = db.read_friends(&usr, &args).await.expect("flat read");
    let seeded_rows: Vec<_> = flat.iter().filter(|f| f.seeded).collect();
    assert_eq!(seeded_rows.len(), 5);
    for friend in &seeded_rows {
        assert!(friend.address.is_none());
        assert!(friend.pets.is_none());
        assert!(friend.quotes.is_none());
    }

    // Non-flat read: relations resolved exactly one level deep.
    let args = friends::handlers::params::ReadQuery {
        flat: Some("false".to_string()),
        ..Default::default()
    }
    .parse()
    .expect("flat=false parses");
    let nested = db.read_friends(&usr, &args).await.expect("non-flat read");
    let quote_catalog: HashSet<Uuid> = db
        .read_quotes(&usr, &args)
        .await
        .expect("quotes read")
        .iter()
        .map(|q| q.quote_id)
        .collect();

    for friend in nested.iter().filter(|f| f.seeded) {
        let pets = friend.pets.as_ref().expect("pets resolved");
        assert!(pets.len() <= 3);
        for pet in pets {
            assert_eq!(pet.friend_id, friend.friend_id);
            // One level deep: the nested pet does not resolve its owner back.
            assert!(pet.friend.is_none());
        }

        let quotes = friend.quotes.as_ref().expect("quotes resolved");
        assert!(quotes.len() <= 5);
        let distinct: HashSet<Uuid> = quotes.iter().map(|q| q.quote_id).collect();
        assert_eq!(distinct.len(), quotes.len());
        assert!(distinct.is_subset(&quote_catalog));
        for quote in quotes {
            assert!(quote.friends.is_none());
        }

        match (&friend.address_id, &friend.address) {
            (Some(id), Some(address)) => {
                assert_eq!(address.address_id, *id);
                assert!(address.friends.is_none());
            }
            (None, None) => {}
            other => panic!("address projection out of sync: {other:?}"),
        }
    }

    // Addresses resolve their residents one level deep.
    let addresses = db.read_addresses(&usr, &args).await.expect("addresses");
    for address in addresses.iter().filter(|a| a.seeded) {
        let residents = address.friends.as_ref().expect("friends resolved");
        // Seeded addresses are only inserted when assigned to someone.
        assert!(!residents.is_empty());
        for resident in residents {
            assert_eq!(resident.address_id, Some(address.address_id));
            assert!(resident.address.is_none());
        }
    }

    // No pet is owned by more than one friend: ids are globally unique and
    // each carries exactly one owner reference.
    let pets = db.read_pets(&usr, &args).await.expect("pets");
    let mut pet_ids = HashSet::new();
    for pet in pets.iter().filter(|p| p.seeded) {
        assert!(pet_ids.insert(pet.pet_id));
        let owner = pet.friend.as_ref().expect("owner resolved");
        assert_eq!(owner.friend_id, pet.friend_id);
    }

    // Reset removes every seeded row and reports the pending deletions.
    let removed = db.remove_seed(&usr, true).await.expect("reset");
    assert_eq!(removed.nr_seeded_friends, 5);
    assert_eq!(removed.nr_seeded_addresses, seeded.nr_seeded_addresses);
    assert_eq!(removed.nr_seeded_pets, seeded.nr_seeded_pets);
    assert_eq!(removed.nr_unseeded_friends, 0);

    let info = db.info().await.expect("info after reset");
    assert_eq!(info.db.nr_seeded_friends, 0);
    assert_eq!(info.db.nr_seeded_addresses, 0);
    assert_eq!(info.db.nr_seeded_pets, 0);
    assert_eq!(info.db.nr_seeded_quotes, 0);
    assert_eq!(info.db.nr_unseeded_friends, unseeded_friends_before);
}
