pub mod parser;
pub mod schema;

pub use parser::listings_from_status;
pub use schema::listing_request;
