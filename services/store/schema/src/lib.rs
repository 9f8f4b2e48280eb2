//! sea-orm entities owned by the store service.

pub mod brands;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod colors;
pub mod product_variants;
pub mod products;
pub mod sizes;
pub mod variant_colors;
