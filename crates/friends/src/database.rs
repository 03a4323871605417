//! Repository layer over the Postgres pool.
//!
//! Every operation acquires a scoped connection (or transaction), performs
//! one unit of work and releases it on every exit path. Reads attach no
//! write-tracking of any kind; seed and reset commit atomically.

use std::collections::HashMap;

use sqlx::{FromRow, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::handlers::params::ReadArgs;
use crate::models::{Address, AdminInfo, DbInfo, Friend, Info, Pet, Quote, UserSession};
use crate::seed::{AddressFields, SeedGenerator};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

async fn count(conn: &mut PgConnection, sql: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(sql).fetch_one(conn).await
}

async fn count_by_flag(
    conn: &mut PgConnection,
    sql: &str,
    seeded: bool,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(sql).bind(seeded).fetch_one(conn).await
}

/// One row of the friend-quote join used by the non-flat projections.
#[derive(Debug, FromRow)]
struct FriendQuoteRow {
    friend_id: Uuid,
    quote_id: Uuid,
    quote: String,
    author: String,
    seeded: bool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Database-wide counters. Read-only.
    pub async fn info(&self) -> Result<Info, AppError> {
        let mut conn = self.pool.acquire().await?;

        let nr_seeded_friends = count(&mut conn, "SELECT COUNT(*) FROM friends WHERE seeded").await?;
        let nr_unseeded_friends =
            count(&mut conn, "SELECT COUNT(*) FROM friends WHERE NOT seeded").await?;
        let nr_friends_with_address = count(
            &mut conn,
            "SELECT COUNT(*) FROM friends WHERE address_id IS NOT NULL",
        )
        .await?;
        let nr_seeded_addresses =
            count(&mut conn, "SELECT COUNT(*) FROM addresses WHERE seeded").await?;
        let nr_unseeded_addresses =
            count(&mut conn, "SELECT COUNT(*) FROM addresses WHERE NOT seeded").await?;
        let nr_seeded_pets = count(&mut conn, "SELECT COUNT(*) FROM pets WHERE seeded").await?;
        let nr_unseeded_pets =
            count(&mut conn, "SELECT COUNT(*) FROM pets WHERE NOT seeded").await?;
        let nr_seeded_quotes = count(&mut conn, "SELECT COUNT(*) FROM quotes WHERE seeded").await?;
        let nr_unseeded_quotes =
            count(&mut conn, "SELECT COUNT(*) FROM quotes WHERE NOT seeded").await?;

        Ok(Info {
            db: DbInfo {
                nr_seeded_friends,
                nr_unseeded_friends,
                nr_friends_with_address,
                nr_seeded_addresses,
                nr_unseeded_addresses,
                nr_seeded_pets,
                nr_unseeded_pets,
                nr_seeded_quotes,
                nr_unseeded_quotes,
            },
        })
    }

    /// Generates and inserts `nr_of_items` friends with their relations in
    /// one transaction, returning the staged-insert counts.
    pub async fn seed(
        &self,
        _usr: &UserSession,
        nr_of_items: usize,
    ) -> Result<AdminInfo, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut generator = SeedGenerator::new();

        // The quote catalog is generated once globally. The check is plain
        // read-then-act: two callers racing on an empty catalog can both
        // insert it (kept as observed behavior).
        let seeded_quotes = count_by_flag(
            &mut tx,
            "SELECT COUNT(*) FROM quotes WHERE seeded = $1",
            true,
        )
        .await?;
        let new_quotes = if seeded_quotes == 0 {
            generator.quote_catalog()
        } else {
            Vec::new()
        };
        for quote in &new_quotes {
            sqlx::query("INSERT INTO quotes (quote_id, quote, author, seeded) VALUES ($1, $2, $3, TRUE)")
                .bind(quote.quote_id)
                .bind(&quote.quote)
                .bind(&quote.author)
                .execute(&mut *tx)
                .await?;
        }

        // Favourites are drawn from the whole quotes table, the rows staged
        // above included.
        let quote_ids: Vec<Uuid> = sqlx::query_scalar("SELECT quote_id FROM quotes")
            .fetch_all(&mut *tx)
            .await?;
        let existing_addresses: Vec<AddressFields> =
            sqlx::query_as("SELECT street_address, zip_code, city, country FROM addresses")
                .fetch_all(&mut *tx)
                .await?;

        let plan = generator.plan(nr_of_items, &existing_addresses, &quote_ids);

        for address in &plan.addresses {
            sqlx::query(
                r#"
                INSERT INTO addresses (address_id, street_address, zip_code, city, country, seeded)
                VALUES ($1, $2, $3, $4, $5, TRUE)
                "#,
            )
            .bind(address.address_id)
            .bind(&address.fields.street_address)
            .bind(address.fields.zip_code)
            .bind(&address.fields.city)
            .bind(&address.fields.country)
            .execute(&mut *tx)
            .await?;
        }

        for planned in &plan.friends {
            sqlx::query(
                r#"
                INSERT INTO friends (friend_id, first_name, last_name, email, birthday, seeded, address_id)
                VALUES ($1, $2, $3, $4, $5, TRUE, $6)
                "#,
            )
            .bind(planned.friend.friend_id)
            .bind(&planned.friend.first_name)
            .bind(&planned.friend.last_name)
            .bind(&planned.friend.email)
            .bind(planned.friend.birthday)
            .bind(planned.address_id)
            .execute(&mut *tx)
            .await?;

            for pet in &planned.pets {
                sqlx::query(
                    r#"
                    INSERT INTO pets (pet_id, friend_id, kind, mood, name, seeded)
                    VALUES ($1, $2, $3, $4, $5, TRUE)
                    "#,
                )
                .bind(pet.pet_id)
                .bind(planned.friend.friend_id)
                .bind(pet.kind)
                .bind(pet.mood)
                .bind(&pet.name)
                .execute(&mut *tx)
                .await?;
            }

            for quote_id in &planned.favorite_quote_ids {
                sqlx::query("INSERT INTO friend_quotes (friend_id, quote_id) VALUES ($1, $2)")
                    .bind(planned.friend.friend_id)
                    .bind(quote_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        // Counts come from the staged batch, before the commit.
        let admin_info = AdminInfo {
            nr_seeded_friends: plan.friends.len() as i64,
            nr_seeded_addresses: plan.addresses.len() as i64,
            nr_seeded_pets: plan.pet_count() as i64,
            nr_seeded_quotes: new_quotes.len() as i64,
            ..AdminInfo::default()
        };

        tx.commit().await?;

        info!(
            friends = admin_info.nr_seeded_friends,
            addresses = admin_info.nr_seeded_addresses,
            pets = admin_info.nr_seeded_pets,
            quotes = admin_info.nr_seeded_quotes,
            "Seeded database"
        );
        Ok(admin_info)
    }

    /// Bulk-deletes every friend, address and quote whose seeded flag matches
    /// `seeded`. Pets are not targeted directly; they cascade with their
    /// owning friend. Counts reflect the pending deletions.
    pub async fn remove_seed(
        &self,
        _usr: &UserSession,
        seeded: bool,
    ) -> Result<AdminInfo, AppError> {
        let mut tx = self.pool.begin().await?;

        let friends = count_by_flag(
            &mut tx,
            "SELECT COUNT(*) FROM friends WHERE seeded = $1",
            seeded,
        )
        .await?;
        let pets = count_by_flag(
            &mut tx,
            "SELECT COUNT(*) FROM pets p JOIN friends f ON f.friend_id = p.friend_id WHERE f.seeded = $1",
            seeded,
        )
        .await?;
        let addresses = count_by_flag(
            &mut tx,
            "SELECT COUNT(*) FROM addresses WHERE seeded = $1",
            seeded,
        )
        .await?;
        let quotes = count_by_flag(
            &mut tx,
            "SELECT COUNT(*) FROM quotes WHERE seeded = $1",
            seeded,
        )
        .await?;

        sqlx::query("DELETE FROM friends WHERE seeded = $1")
            .bind(seeded)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM addresses WHERE seeded = $1")
            .bind(seeded)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM quotes WHERE seeded = $1")
            .bind(seeded)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let admin_info = if seeded {
            AdminInfo {
                nr_seeded_friends: friends,
                nr_seeded_addresses: addresses,
                nr_seeded_pets: pets,
                nr_seeded_quotes: quotes,
                ..AdminInfo::default()
            }
        } else {
            AdminInfo {
                nr_unseeded_friends: friends,
                nr_unseeded_addresses: addresses,
                nr_unseeded_pets: pets,
                nr_unseeded_quotes: quotes,
                ..AdminInfo::default()
            }
        };

        info!(seeded, friends, addresses, pets, quotes, "Removed seeded data");
        Ok(admin_info)
    }

    /// Lists friends, flat or with address, pets and quotes resolved one
    /// level deep.
    pub async fn read_friends(
        &self,
        _usr: &UserSession,
        args: &ReadArgs,
    ) -> Result<Vec<Friend>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let mut friends: Vec<Friend> = sqlx::query_as(
            "SELECT friend_id, first_name, last_name, email, birthday, seeded, address_id FROM friends",
        )
        .fetch_all(&mut *conn)
        .await?;

        if args.flat {
            return Ok(friends);
        }

        let friend_ids: Vec<Uuid> = friends.iter().map(|f| f.friend_id).collect();
        let address_ids: Vec<Uuid> = friends.iter().filter_map(|f| f.address_id).collect();

        let addresses: Vec<Address> = sqlx::query_as(
            r#"
            SELECT address_id, street_address, zip_code, city, country, seeded
            FROM addresses
            WHERE address_id = ANY($1)
            "#,
        )
        .bind(&address_ids)
        .fetch_all(&mut *conn)
        .await?;
        let addresses_by_id: HashMap<Uuid, Address> = addresses
            .into_iter()
            .map(|a| (a.address_id, a))
            .collect();

        let pets: Vec<Pet> = sqlx::query_as(
            "SELECT pet_id, friend_id, kind, mood, name, seeded FROM pets WHERE friend_id = ANY($1)",
        )
        .bind(&friend_ids)
        .fetch_all(&mut *conn)
        .await?;
        let mut pets_by_friend: HashMap<Uuid, Vec<Pet>> = HashMap::new();
        for pet in pets {
            pets_by_friend.entry(pet.friend_id).or_default().push(pet);
        }

        let quote_rows: Vec<FriendQuoteRow> = sqlx::query_as(
            r#"
            SELECT fq.friend_id, q.quote_id, q.quote, q.author, q.seeded
            FROM friend_quotes fq
            JOIN quotes q ON q.quote_id = fq.quote_id
            WHERE fq.friend_id = ANY($1)
            "#,
        )
        .bind(&friend_ids)
        .fetch_all(&mut *conn)
        .await?;
        let mut quotes_by_friend: HashMap<Uuid, Vec<Quote>> = HashMap::new();
        for row in quote_rows {
            quotes_by_friend.entry(row.friend_id).or_default().push(Quote {
                quote_id: row.quote_id,
                quote: row.quote,
                author: row.author,
                seeded: row.seeded,
                friends: None,
            });
        }

        for friend in &mut friends {
            friend.address = friend
                .address_id
                .and_then(|id| addresses_by_id.get(&id).cloned());
            friend.pets = Some(pets_by_friend.remove(&friend.friend_id).unwrap_or_default());
            friend.quotes = Some(
                quotes_by_friend
                    .remove(&friend.friend_id)
                    .unwrap_or_default(),
            );
        }

        Ok(friends)
    }

    /// Lists addresses, flat or with their resident friends resolved.
    pub async fn read_addresses(
        &self,
        _usr: &UserSession,
        args: &ReadArgs,
    ) -> Result<Vec<Address>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let mut addresses: Vec<Address> = sqlx::query_as(
            "SELECT address_id, street_address, zip_code, city, country, seeded FROM addresses",
        )
        .fetch_all(&mut *conn)
        .await?;

        if args.flat {
            return Ok(addresses);
        }

        let address_ids: Vec<Uuid> = addresses.iter().map(|a| a.address_id).collect();
        let friends: Vec<Friend> = sqlx::query_as(
            r#"
            SELECT friend_id, first_name, last_name, email, birthday, seeded, address_id
            FROM friends
            WHERE address_id = ANY($1)
            "#,
        )
        .bind(&address_ids)
        .fetch_all(&mut *conn)
        .await?;

        let mut friends_by_address: HashMap<Uuid, Vec<Friend>> = HashMap::new();
        for friend in friends {
            if let Some(id) = friend.address_id {
                friends_by_address.entry(id).or_default().push(friend);
            }
        }

        for address in &mut addresses {
            address.friends = Some(
                friends_by_address
                    .remove(&address.address_id)
                    .unwrap_or_default(),
            );
        }

        Ok(addresses)
    }

    /// Lists quotes, flat or with the friends holding them as favourites.
    pub async fn read_quotes(
        &self,
        _usr: &UserSession,
        args: &ReadArgs,
    ) -> Result<Vec<Quote>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let mut quotes: Vec<Quote> =
            sqlx::query_as("SELECT quote_id, quote, author, seeded FROM quotes")
                .fetch_all(&mut *conn)
                .await?;

        if args.flat {
            return Ok(quotes);
        }

        let quote_ids: Vec<Uuid> = quotes.iter().map(|q| q.quote_id).collect();

        #[derive(FromRow)]
        struct QuoteFriendRow {
            quote_id: Uuid,
            friend_id: Uuid,
            first_name: String,
            last_name: String,
            email: Option<String>,
            birthday: Option<time::Date>,
            seeded: bool,
            address_id: Option<Uuid>,
        }

        let rows: Vec<QuoteFriendRow> = sqlx::query_as(
            r#"
            SELECT fq.quote_id, f.friend_id, f.first_name, f.last_name, f.email,
                   f.birthday, f.seeded, f.address_id
            FROM friend_quotes fq
            JOIN friends f ON f.friend_id = fq.friend_id
            WHERE fq.quote_id = ANY($1)
            "#,
        )
        .bind(&quote_ids)
        .fetch_all(&mut *conn)
        .await?;

        let mut friends_by_quote: HashMap<Uuid, Vec<Friend>> = HashMap::new();
        for row in rows {
            friends_by_quote.entry(row.quote_id).or_default().push(Friend {
                friend_id: row.friend_id,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                birthday: row.birthday,
                seeded: row.seeded,
                address_id: row.address_id,
                address: None,
                pets: None,
                quotes: None,
            });
        }

        for quote in &mut quotes {
            quote.friends = Some(
                friends_by_quote
                    .remove(&quote.quote_id)
                    .unwrap_or_default(),
            );
        }

        Ok(quotes)
    }

    /// Lists pets, flat or with the owning friend resolved.
    pub async fn read_pets(
        &self,
        _usr: &UserSession,
        args: &ReadArgs,
    ) -> Result<Vec<Pet>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let mut pets: Vec<Pet> =
            sqlx::query_as("SELECT pet_id, friend_id, kind, mood, name, seeded FROM pets")
                .fetch_all(&mut *conn)
                .await?;

        if args.flat {
            return Ok(pets);
        }

        let owner_ids: Vec<Uuid> = pets.iter().map(|p| p.friend_id).collect();
        let friends: Vec<Friend> = sqlx::query_as(
            r#"
            SELECT friend_id, first_name, last_name, email, birthday, seeded, address_id
            FROM friends
            WHERE friend_id = ANY($1)
            "#,
        )
        .bind(&owner_ids)
        .fetch_all(&mut *conn)
        .await?;
        let friends_by_id: HashMap<Uuid, Friend> = friends
            .into_iter()
            .map(|f| (f.friend_id, f))
            .collect();

        for pet in &mut pets {
            pet.friend = friends_by_id.get(&pet.friend_id).cloned();
        }

        Ok(pets)
    }
}
