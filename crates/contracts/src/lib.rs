//! # Contracts
//!
//! Frozen interface contracts shared by the dispatcher, the config loader and
//! the CLI. All business crates can only depend on this crate, reverse
//! dependencies are prohibited.
//!
//! ## Record Model
//! - One message + one destination (channel set, flag set) per dispatch
//! - The call site is captured at the call expression, never passed by hand
//! - One `FormattedRecord` per dispatch, identical on every channel

mod blueprint;
mod call_site;
mod channel;
mod error;
mod format_kind;
mod profile;
mod record;
mod sink;

pub use blueprint::*;
pub use call_site::{CallSite, UNKNOWN_FUNCTION};
#[doc(hidden)]
pub use call_site::{__function_name, __type_name_of};
pub use channel::{Channel, ChannelSet, Flag, FlagSet};
pub use error::*;
pub use format_kind::FormatKind;
pub use profile::{ChannelProfile, Destination};
pub use record::FormattedRecord;
pub use sink::RecordSink;
