//! Request and response types shared by the API surface.
//!
//! These mirror the JSON bodies exchanged with the picks backend so that the
//! demo layer and the real client agree on shapes.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
