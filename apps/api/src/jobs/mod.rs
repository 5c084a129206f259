// Job listings: the filter the listing page applies before rendering cards.

pub mod filter;
pub mod handlers;
