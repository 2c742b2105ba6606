//! Terminal card browser for a static user feed, with an independent counter.
//!
//! State lives in two engines ([`engine::UserListEngine`],
//! [`engine::CounterEngine`]) backed by pure MVI reducers under [`ui`].

pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod ui;
