//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the migrations exactly; regenerate with `diesel print-schema`
//! after schema changes.

diesel::table! {
    /// Registered members.
    members (id) {
        id -> Int8,
        email -> Varchar,
        nickname -> Varchar,
        profile_image_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Shared ledgers, one owner each, invite code unique across all rows.
    books (id) {
        id -> Int8,
        name -> Varchar,
        invite_code -> Varchar,
        owner_id -> Int8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Membership rows, unique per (book_id, member_id).
    book_members (id) {
        id -> Int8,
        book_id -> Int8,
        member_id -> Int8,
        role -> Varchar,
        joined_at -> Timestamptz,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Named balances scoped to a book.
    assets (id) {
        id -> Int8,
        book_id -> Int8,
        name -> Varchar,
        balance -> Int8,
        owner_member_id -> Nullable<Int8>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(members, books, book_members, assets);
