// Portfolio generator: a pure function from (template, profile, projects) to
// one standalone HTML document. No I/O happens below this module boundary
// apart from the handlers.

pub mod assets;
pub mod copy;
pub mod generator;
pub mod handlers;
pub mod html;
pub mod model;
pub mod palette;
pub mod regions;
pub mod sections;
pub mod skills;
pub mod stylesheet;

pub use generator::generate_portfolio_html;
