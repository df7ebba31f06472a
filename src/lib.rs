pub mod artifact;
pub mod delegate;
pub mod error;
pub mod launch;
pub mod locator;
pub mod platform;
pub mod runtime;

pub use error::LauncherError;
