mod dispatcher;
mod service;
mod ws_handler;

pub use dispatcher::*;
pub use service::*;
pub use ws_handler::*;
