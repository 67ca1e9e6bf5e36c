pub mod product;

pub use product::{PgProductStore, ProductStore};
