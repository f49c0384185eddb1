//! Query modules for the Datatank.
//!
//! Each module provides a query struct that borrows the [`Connection`](crate::connection::Connection)
//! and [`ResourceCache`](crate::cache::ResourceCache) of a [`Datatank`](crate::Datatank)
//! and exposes async methods returning `Result<Arc<T>>`.

pub mod cards;
pub mod catalogs;
pub mod images;
pub mod rulings;
pub mod search;

pub use cards::CardQuery;
pub use catalogs::CatalogQuery;
pub use images::ImageQuery;
pub use rulings::RulingQuery;
pub use search::SearchQuery;
