//! NewReleases API model types.

mod auth_key;
mod channel;
mod ip_net;
mod project;
mod provider;
mod release;
mod tag;
mod webhook;

pub use auth_key::*;
pub use channel::*;
pub use ip_net::*;
pub use project::*;
pub use provider::*;
pub use release::*;
pub use tag::*;
pub use webhook::*;
