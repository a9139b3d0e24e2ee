//! tanulib: generic ordered containers and the algorithms over them.
//!
//! - [`seq`]: sequence containers ([`seq::ArraySeq`],
//!   [`seq::FlatDeque`], [`seq::CursorList`]) and the shared
//!   [`seq::Sequence`] surface.
//! - [`assoc`]: ordered associative containers over an AA tree
//!   ([`assoc::OrderedSet`], [`assoc::OrderedMap`] and their multi
//!   variants).
//! - [`algo`]: container-independent search and sort
//!   ([`algo::Locate`], [`algo::BoundSearch`], [`algo::sort`],
//!   [`algo::partial_sort`], [`algo::nth_element`]).
//! - [`ord`]: the injected comparison capability
//!   ([`ord::Compare`], [`ord::NaturalOrder`]).
//! - [`own`]: the move-only heap slot [`own::OwnBox`].

pub use algo;
pub use assoc;
pub use ord;
pub use own;
pub use seq;
