//! Non-owning, type-safe byte views over contiguous memory.
//!
//! A [`ByteSpan`] reinterprets a contiguous region (a typed slice, a fixed
//! array, a single value, or a raw pointer) as a sequence of bytes, for
//! serializers, storage engines and wire codecs that move raw memory
//! without copying. The span never owns the memory; lifetimes tie it to the
//! source borrow.
//!
//! # Byte views
//!
//! ```
//! use byte_span::ByteSpan;
//!
//! let values = [1i32, 2, 3, 4];
//! let span = ByteSpan::from_slice(&values);
//! assert_eq!(span.len(), 16);
//! assert_eq!(span.at(0).unwrap(), values[0].to_ne_bytes()[0]);
//! ```
//!
//! # Mutable views
//!
//! Writes through a mutable span alias the source buffer:
//!
//! ```
//! use byte_span::ByteSpanMut;
//!
//! let mut buf = [1u8, 2, 3];
//! let mut span = ByteSpanMut::from(&mut buf[..]);
//! span[1] = 42;
//! assert_eq!(buf[1], 42);
//! ```
//!
//! # Construction rules
//!
//! Which sources produce a span, and how, is a closed compile-time ruleset:
//!
//! - byte slices and arrays convert implicitly via [`From`];
//! - typed sources take the explicit [`ByteSpan::from_slice`] /
//!   [`ByteSpan::from_ref`] path, gated on the [`IntoBytes`] bounds that
//!   make the reinterpretation sound; a `String` or `Vec` has no byte
//!   view;
//! - mutable spans demand writable sources, so a shared borrow can never be
//!   laundered into write access, and additionally require [`FromBytes`]
//!   so that no byte pattern written through the view can forge an invalid
//!   source value;
//! - [`Fixed`]-extent spans check statically sized sources at compile time
//!   and dynamically sized ones through `TryFrom`;
//! - raw-pointer construction is `unsafe` with a documented contract.
//!
//! # Extents
//!
//! A span is either [`Dynamic`] (length carried at runtime, the default) or
//! [`Fixed<N>`](Fixed) (length pinned at compile time). Only `Dynamic` and
//! `Fixed<0>` spans are default-constructible.

#![no_std]

// Span types and extents
pub use byte_span_core::{ByteSpan, ByteSpanMut, Dynamic, Extent, Fixed};

// Iteration
pub use byte_span_core::{ByteIter, ByteIterMut};

// Errors
pub use byte_span_core::{Result, SpanError};

// zerocopy vocabulary for the source-type bounds
pub use byte_span_core::{FromBytes, Immutable, IntoBytes, KnownLayout};
