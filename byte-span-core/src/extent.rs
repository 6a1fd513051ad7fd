//! Extent markers for byte spans.

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Dynamic {}
    impl<const N: usize> Sealed for super::Fixed<N> {}
}

/// Extent category of a span type: length fixed at compile time, or carried
/// at runtime.
///
/// Sealed; the only implementors are [`Dynamic`] and [`Fixed`].
pub trait Extent: sealed::Sealed {
    /// The statically known byte length, if this extent carries one.
    const STATIC: Option<usize>;
}

/// Marker for spans whose length is known only at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Dynamic;

impl Extent for Dynamic {
    const STATIC: Option<usize> = None;
}

/// Marker for spans whose length is fixed at `N` bytes at compile time.
///
/// Fixed-extent spans are not default-constructible unless `N == 0`:
///
/// ```
/// use byte_span_core::{ByteSpan, Fixed};
///
/// let empty: ByteSpan<'_, Fixed<0>> = ByteSpan::new();
/// assert!(empty.is_empty());
/// ```
///
/// ```compile_fail
/// use byte_span_core::{ByteSpan, Fixed};
///
/// let span: ByteSpan<'_, Fixed<8>> = ByteSpan::new();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Fixed<const N: usize>;

impl<const N: usize> Extent for Fixed<N> {
    const STATIC: Option<usize> = Some(N);
}
