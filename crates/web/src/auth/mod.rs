mod authenticator;
mod session;

pub use authenticator::Authenticator;
pub use session::SessionStore;
