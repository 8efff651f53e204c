//! Diesel table definitions for the users schema.
//!
//! Kept in sync with `backend/migrations` by hand.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Primary key issued by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Display name; never empty.
        name -> Varchar,
        /// Free-form biography; never empty.
        bio -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (maintained by trigger).
        updated_at -> Timestamptz,
    }
}
