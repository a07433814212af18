//! Data types shared by the grouping, selection and layout modules.

mod group;
mod record;
mod selection;

pub use group::*;
pub use record::*;
pub use selection::*;
