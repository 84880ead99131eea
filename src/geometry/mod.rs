//! Representative point resolution.
//!
//! Node coordinates are collected once into a [`CoordinateIndex`]; the
//! [`GeometryResolver`] then reduces ways and relations to the mean of
//! their node members.

mod index;
mod resolver;

pub use index::CoordinateIndex;
pub use resolver::GeometryResolver;
