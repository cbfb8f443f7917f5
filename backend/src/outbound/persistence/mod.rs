//! PostgreSQL persistence adapters using Diesel.
//!
//! Thin adapters only: each repository translates between Diesel rows and
//! domain types and maps store errors; business rules live in the domain
//! services. Row structs and the schema are internal to this module.

mod diesel_asset_repository;
mod diesel_book_member_repository;
mod diesel_book_repository;
mod diesel_member_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_asset_repository::DieselAssetRepository;
pub use diesel_book_member_repository::DieselBookMemberRepository;
pub use diesel_book_repository::DieselBookRepository;
pub use diesel_member_repository::DieselMemberRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
