pub mod handlers;
pub mod links;
