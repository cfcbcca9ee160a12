pub mod calc;
pub mod completion;
pub mod config;
pub mod render;
pub mod session;

pub use calc::handle_calc;
pub use completion::handle_completion;
pub use config::handle_config;
pub use session::handle_session;
