// The four cleanup transforms. Each one is a pure function over the record
// table; none of them has a failure mode.

pub mod dedup;
pub mod domain_tag;
pub mod fuzzy;
pub mod phone;

pub use dedup::dedup;
pub use domain_tag::tag_domains;
pub use fuzzy::suggest_merges;
pub use phone::format_phones;
