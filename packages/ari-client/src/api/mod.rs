//! REST resource groups.
//!
//! Each handle borrows the [`AriClient`](crate::AriClient) and maps one method
//! to one endpoint.

mod bridges;
mod channels;
mod recordings;

pub use bridges::Bridges;
pub use channels::Channels;
pub use recordings::Recordings;
