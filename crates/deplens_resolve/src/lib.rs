//! Include resolution: mapping raw include specifications to absolute
//! filesystem paths by search-directory precedence.

pub mod exists_cache;
pub mod resolver;

pub use exists_cache::ExistsCache;
pub use resolver::resolve;
