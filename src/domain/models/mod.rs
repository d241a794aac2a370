mod api;
mod flow;
mod food;
mod image;
mod language;
mod messages;
mod pagination;
mod query;
mod route;
mod session;

pub use api::*;
pub use flow::*;
pub use food::*;
pub use image::*;
pub use language::*;
pub use messages::*;
pub use pagination::*;
pub use query::*;
pub use route::*;
pub use session::*;
