//! The implicit and checked conversion surface.
//!
//! Byte sources convert implicitly via `From`; everything else goes through
//! the explicit constructors on the span types. Fixed-extent targets accept
//! statically sized sources whose length matches the extent, and
//! dynamically sized sources only through the fallible `TryFrom` path.

use core::ptr::NonNull;

use crate::error::SpanError;
use crate::extent::{Dynamic, Extent, Fixed};
use crate::span::ByteSpan;
use crate::span_mut::ByteSpanMut;

// Byte slices: implicit, dynamic extent only.

impl<'a> From<&'a [u8]> for ByteSpan<'a, Dynamic> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

// A writable source may always back a read-only view.
impl<'a> From<&'a mut [u8]> for ByteSpan<'a, Dynamic> {
    #[inline]
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

impl<'a> From<&'a mut [u8]> for ByteSpanMut<'a, Dynamic> {
    #[inline]
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

// Byte arrays: implicit. The fixed-extent target exists only for the exact
// length, so a static mismatch is a missing impl rather than a runtime
// error.

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSpan<'a, Dynamic> {
    #[inline]
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteSpan<'a, Fixed<N>> {
    #[inline]
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

impl<'a, const N: usize> From<&'a mut [u8; N]> for ByteSpanMut<'a, Dynamic> {
    #[inline]
    fn from(bytes: &'a mut [u8; N]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

impl<'a, const N: usize> From<&'a mut [u8; N]> for ByteSpanMut<'a, Fixed<N>> {
    #[inline]
    fn from(bytes: &'a mut [u8; N]) -> Self {
        Self::from_byte_slice(bytes)
    }
}

// Widening: a fixed extent always fits a dynamic span.

impl<'a, const N: usize> From<ByteSpan<'a, Fixed<N>>> for ByteSpan<'a, Dynamic> {
    #[inline]
    fn from(span: ByteSpan<'a, Fixed<N>>) -> Self {
        span.into_dynamic()
    }
}

impl<'a, const N: usize> From<ByteSpanMut<'a, Fixed<N>>> for ByteSpanMut<'a, Dynamic> {
    #[inline]
    fn from(span: ByteSpanMut<'a, Fixed<N>>) -> Self {
        span.into_dynamic()
    }
}

// Strengthening: write access may always be given up. There is no path in
// the other direction.

impl<'a, E: Extent> From<ByteSpanMut<'a, E>> for ByteSpan<'a, E> {
    #[inline]
    fn from(span: ByteSpanMut<'a, E>) -> Self {
        span.into_view()
    }
}

// Runtime-checked fixed extents: dynamically sized sources carry their
// length at runtime, so the extent check is a fallible conversion.

impl<'a, const N: usize> TryFrom<&'a [u8]> for ByteSpan<'a, Fixed<N>> {
    type Error = SpanError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, SpanError> {
        if bytes.len() != N {
            return Err(SpanError::ExtentMismatch {
                expected: N,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_byte_slice(bytes))
    }
}

impl<'a, const N: usize> TryFrom<&'a mut [u8]> for ByteSpanMut<'a, Fixed<N>> {
    type Error = SpanError;

    fn try_from(bytes: &'a mut [u8]) -> Result<Self, SpanError> {
        if bytes.len() != N {
            return Err(SpanError::ExtentMismatch {
                expected: N,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_byte_slice(bytes))
    }
}

impl<'a, const N: usize> TryFrom<ByteSpan<'a, Dynamic>> for ByteSpan<'a, Fixed<N>> {
    type Error = SpanError;

    fn try_from(span: ByteSpan<'a, Dynamic>) -> Result<Self, SpanError> {
        if span.len() != N {
            return Err(SpanError::ExtentMismatch {
                expected: N,
                actual: span.len(),
            });
        }
        // SAFETY: span pointers are never null.
        let ptr = unsafe { NonNull::new_unchecked(span.as_ptr().cast_mut()) };
        Ok(Self::from_parts(ptr, N))
    }
}

impl<'a, const N: usize> TryFrom<ByteSpanMut<'a, Dynamic>> for ByteSpanMut<'a, Fixed<N>> {
    type Error = SpanError;

    fn try_from(mut span: ByteSpanMut<'a, Dynamic>) -> Result<Self, SpanError> {
        if span.len() != N {
            return Err(SpanError::ExtentMismatch {
                expected: N,
                actual: span.len(),
            });
        }
        // SAFETY: span pointers are never null.
        let ptr = unsafe { NonNull::new_unchecked(span.as_mut_ptr()) };
        Ok(Self::from_parts(ptr, N))
    }
}
