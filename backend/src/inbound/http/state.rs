//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only depend on the
//! domain's driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AssetCommand, AssetQuery, BookCommand, BookQuery, MemberCommand, MemberQuery,
    MembershipCommand, MembershipQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub members: Arc<dyn MemberCommand>,
    pub members_query: Arc<dyn MemberQuery>,
    pub books: Arc<dyn BookCommand>,
    pub books_query: Arc<dyn BookQuery>,
    pub memberships: Arc<dyn MembershipCommand>,
    pub memberships_query: Arc<dyn MembershipQuery>,
    pub assets: Arc<dyn AssetCommand>,
    pub assets_query: Arc<dyn AssetQuery>,
}
