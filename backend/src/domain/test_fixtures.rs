//! Entity fixtures shared by service tests.

use chrono::Utc;

use crate::domain::asset::Asset;
use crate::domain::book::{Book, InviteCode};
use crate::domain::member::Member;
use crate::domain::membership::{BookMember, BookRole};
use crate::domain::timestamps::Timestamps;

pub(crate) fn timestamps() -> Timestamps {
    let now = Utc::now();
    Timestamps::new(now, now)
}

pub(crate) fn member(id: i64, nickname: &str) -> Member {
    Member {
        id,
        email: format!("{nickname}@example.com"),
        nickname: nickname.to_owned(),
        profile_image_url: None,
        timestamps: timestamps(),
    }
}

pub(crate) fn invite_code(raw: &str) -> InviteCode {
    InviteCode::parse(raw).expect("fixture invite code")
}

pub(crate) fn book(id: i64, owner_id: i64, code: &str) -> Book {
    Book {
        id,
        name: "Fixture book".to_owned(),
        invite_code: invite_code(code),
        owner_id,
        timestamps: timestamps(),
    }
}

pub(crate) fn book_member(id: i64, book_id: i64, member_id: i64, role: BookRole) -> BookMember {
    BookMember {
        id,
        book_id,
        member_id,
        role,
        joined_at: Utc::now(),
    }
}

pub(crate) fn asset(id: i64, book_id: i64, balance: i64, owner: Option<i64>) -> Asset {
    Asset {
        id,
        book_id,
        name: "Fixture asset".to_owned(),
        balance,
        owner_member_id: owner,
        timestamps: timestamps(),
    }
}
