//! Domain ports for the hexagonal boundary.
//!
//! Repository ports are implemented by the persistence adapters, driving
//! ports by the domain services; the HTTP adapter only sees driving ports.

mod asset_dependency_probe;
mod asset_repository;
mod assets;
mod book_member_repository;
mod book_repository;
mod books;
mod invite_code_source;
mod member_repository;
mod members;
mod memberships;
mod repository_error;

#[cfg(test)]
pub use asset_dependency_probe::MockAssetDependencyProbe;
pub use asset_dependency_probe::{AssetDependencyProbe, NoDependentsProbe};
#[cfg(test)]
pub use asset_repository::MockAssetRepository;
pub use asset_repository::{AssetRepository, NewAssetRecord};
#[cfg(test)]
pub use assets::{MockAssetCommand, MockAssetQuery};
pub use assets::{AssetCommand, AssetQuery, CreateAssetRequest};
#[cfg(test)]
pub use book_member_repository::MockBookMemberRepository;
pub use book_member_repository::BookMemberRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::BookRepository;
#[cfg(test)]
pub use books::{MockBookCommand, MockBookQuery};
pub use books::{BookCommand, BookQuery};
#[cfg(test)]
pub use invite_code_source::MockInviteCodeSource;
pub use invite_code_source::{InviteCodeSource, RandomInviteCodeSource};
#[cfg(test)]
pub use member_repository::MockMemberRepository;
pub use member_repository::{MemberRepository, NewMemberRecord, ProfilePatch};
#[cfg(test)]
pub use members::{MockMemberCommand, MockMemberQuery};
pub use members::{MemberCommand, MemberQuery, RegisterMemberRequest, UpdateProfileRequest};
#[cfg(test)]
pub use memberships::{MockMembershipCommand, MockMembershipQuery};
pub use memberships::{MembershipCommand, MembershipQuery};
pub use repository_error::RepositoryError;
