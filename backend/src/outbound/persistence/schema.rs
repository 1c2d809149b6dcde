//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Client categories. List and create only.
    categories (category_id) {
        category_id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// Client records.
    clients (client_id) {
        client_id -> Int4,
        name -> Varchar,
        email -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        fax -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
        /// `ClientStatus` code (0–3).
        status -> Int4,
        /// Stamped once on creation.
        created_on -> Timestamptz,
        category_id -> Int4,
    }
}

diesel::joinable!(clients -> categories (category_id));
diesel::allow_tables_to_appear_in_same_query!(categories, clients);
