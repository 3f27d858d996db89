pub mod portfolio;
pub mod project;
pub mod template;
pub mod user;
