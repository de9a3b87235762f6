//! Platform-independent pieces of the site front-end.
//!
//! Nothing in here touches the DOM. The web crate owns the browser glue and
//! drives these types from its frame loop and observer callbacks, which keeps
//! the per-frame arithmetic testable on the host.

pub mod counter;
pub mod format;
pub mod nav;
pub mod once;
pub mod particles;
pub mod timeline;

pub use counter::*;
pub use format::group_thousands;
pub use nav::*;
pub use once::*;
pub use particles::*;
pub use timeline::*;
