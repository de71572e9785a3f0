pub mod resolution_dispatcher;

pub use resolution_dispatcher::{DispatcherSettings, ResolutionDispatcher};
