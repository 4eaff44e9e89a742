//! Diesel table definitions.
//!
//! Kept in sync with `backend/migrations` by hand.

diesel::table! {
    users (id) {
        id -> Uuid,
        name -> Varchar,
        age -> Int4,
        created_at -> Timestamptz,
        /// Insertion sequence; orders user listings.
        seq -> Int8,
    }
}

diesel::table! {
    /// Directed edges: `follower_id` follows `user_id`.
    followers (user_id, follower_id) {
        user_id -> Uuid,
        follower_id -> Uuid,
        created_at -> Timestamptz,
        /// Insertion sequence; orders follower listings.
        seq -> Int8,
    }
}

diesel::table! {
    posts (id) {
        id -> Uuid,
        user_id -> Uuid,
        post_text -> Text,
        created_at -> Timestamptz,
        /// Insertion sequence; breaks timestamp ties.
        seq -> Int8,
    }
}

diesel::joinable!(posts -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(users, followers, posts);
