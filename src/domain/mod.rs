//! User records and the ingestion pipeline that turns a raw feed into cards.

pub mod feed;
pub mod ingest;
pub mod user;

pub use feed::{parse_feed, FeedError, FeedSource};
pub use ingest::{ingest, listing_order, MIN_AGE};
pub use user::{Company, ListedUser, RawUser, UserId, ID_ALPHABET, ID_LEN};
