// Application layer: route table, page loaders and their text rendering.

pub mod pages;
pub mod render;
pub mod routes;

pub use pages::{Page, PageState, Site};
pub use routes::{Route, ROUTE_PATTERNS};
