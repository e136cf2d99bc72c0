//! Extension traits

mod depot;
mod result;
mod timestamps;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use timestamps::TimestampFieldExt as _;
