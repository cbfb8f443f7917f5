//! Helpers for handler-level tests.

use std::sync::Arc;

use crate::domain::ports::{
    MockAssetCommand, MockAssetQuery, MockBookCommand, MockBookQuery, MockMemberCommand,
    MockMemberQuery, MockMembershipCommand, MockMembershipQuery,
};
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; tests configure only the ones they exercise.
/// An unconfigured mock panics when called, which is the point: a handler
/// must not touch ports outside its operation.
pub(crate) struct TestPorts {
    pub members: MockMemberCommand,
    pub members_query: MockMemberQuery,
    pub books: MockBookCommand,
    pub books_query: MockBookQuery,
    pub memberships: MockMembershipCommand,
    pub memberships_query: MockMembershipQuery,
    pub assets: MockAssetCommand,
    pub assets_query: MockAssetQuery,
}

impl TestPorts {
    pub fn new() -> Self {
        Self {
            members: MockMemberCommand::new(),
            members_query: MockMemberQuery::new(),
            books: MockBookCommand::new(),
            books_query: MockBookQuery::new(),
            memberships: MockMembershipCommand::new(),
            memberships_query: MockMembershipQuery::new(),
            assets: MockAssetCommand::new(),
            assets_query: MockAssetQuery::new(),
        }
    }

    pub fn into_state(self) -> HttpState {
        HttpState {
            members: Arc::new(self.members),
            members_query: Arc::new(self.members_query),
            books: Arc::new(self.books),
            books_query: Arc::new(self.books_query),
            memberships: Arc::new(self.memberships),
            memberships_query: Arc::new(self.memberships_query),
            assets: Arc::new(self.assets),
            assets_query: Arc::new(self.assets_query),
        }
    }
}
