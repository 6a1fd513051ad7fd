//! Core non-owning byte views over contiguous memory.
//!
//! [`ByteSpan`] and [`ByteSpanMut`] reinterpret a contiguous region (a
//! typed slice, a fixed array, a single value, or a raw pointer) as a
//! sequence of bytes, without copying and without taking ownership.
//!
//! Construction is a closed ruleset enforced at compile time: byte sources
//! convert implicitly, typed sources require an explicit constructor gated
//! on the zerocopy bounds that make the reinterpretation sound, read-only
//! sources can never produce a mutable view, and fixed-extent mismatches on
//! statically sized sources do not compile.
//!
//! ```
//! use byte_span_core::{ByteSpan, ByteSpanMut};
//!
//! // A typed region viewed as bytes: 4 x 4 bytes.
//! let values = [1i32, 2, 3, 4];
//! let span = ByteSpan::from_slice(&values);
//! assert_eq!(span.len(), 16);
//!
//! // Writes through a mutable view alias the source buffer.
//! let mut buf = [1u8, 2, 3];
//! let mut view = ByteSpanMut::from(&mut buf[..]);
//! view[1] = 42;
//! assert_eq!(buf, [1, 42, 3]);
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

mod convert;
mod error;
mod extent;
mod iter;
mod span;
mod span_mut;

#[cfg(test)]
mod tests;

pub use error::{Result, SpanError};
pub use extent::{Dynamic, Extent, Fixed};
pub use iter::{ByteIter, ByteIterMut};
pub use span::ByteSpan;
pub use span_mut::ByteSpanMut;

// Re-export the zerocopy vocabulary so dependents can name the source-type
// bounds (and derive them) without depending on zerocopy directly.
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
