pub mod dedupe;
pub mod extract;
pub mod filter;

pub use dedupe::dedupe;
pub use extract::extract_links;
pub use filter::filter_same_domain;
