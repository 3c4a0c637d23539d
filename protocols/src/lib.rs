//! Wire-level DNS handling that the resolver library does not cover.

pub mod axfr;
