//! One-shot transformation of the raw feed into listed users.

use std::cmp::Ordering;

use rand::Rng;

use super::user::{ListedUser, RawUser, UserId};

/// Users younger than this never enter any collection.
pub const MIN_AGE: i64 = 18;

/// Filters out minors, assigns fresh ids and sorts by [`listing_order`].
pub fn ingest<R: Rng>(raw: &[RawUser], rng: &mut R) -> Vec<ListedUser> {
    let mut users: Vec<ListedUser> = raw
        .iter()
        .filter(|user| user.age >= MIN_AGE)
        .map(|user| ListedUser::from_raw(user, UserId::generate(rng)))
        .collect();
    users.sort_by(listing_order);
    users
}

/// Ascending age, ties broken by company name (ordinal comparison).
pub fn listing_order(a: &ListedUser, b: &ListedUser) -> Ordering {
    a.age
        .cmp(&b.age)
        .then_with(|| a.company_name.cmp(&b.company_name))
}
