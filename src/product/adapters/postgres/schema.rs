//! Diesel schema for product persistence.

diesel::table! {
    /// Catalog products.
    products (id) {
        /// Generated product identifier.
        id -> Int8,
        /// Product name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Unit price.
        price -> Float8,
        /// Units on hand.
        stock -> Int4,
        /// Category in canonical form.
        #[max_length = 50]
        category -> Varchar,
    }
}
