use crate::{ByteSpan, ByteSpanMut, Fixed};

#[test]
fn swap_exchanges_metadata_only() {
    let a = [1u8, 2, 3];
    let b = [4u8, 5];
    let mut span_a = ByteSpan::from(&a[..]);
    let mut span_b = ByteSpan::from(&b[..]);

    span_a.swap(&mut span_b);

    assert_eq!(span_a.as_ptr(), b.as_ptr());
    assert_eq!(span_a.len(), 2);
    assert_eq!(span_b.as_ptr(), a.as_ptr());
    assert_eq!(span_b.len(), 3);

    // the viewed bytes are never touched
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [4, 5]);
}

#[test]
fn double_swap_restores_both_spans() {
    let a = [1u8, 2, 3];
    let b = [4u8, 5];
    let mut span_a = ByteSpan::from(&a[..]);
    let mut span_b = ByteSpan::from(&b[..]);

    span_a.swap(&mut span_b);
    span_a.swap(&mut span_b);

    assert_eq!(span_a.as_ptr(), a.as_ptr());
    assert_eq!(span_a.len(), 3);
    assert_eq!(span_b.as_ptr(), b.as_ptr());
    assert_eq!(span_b.len(), 2);
}

#[test]
fn mem_swap_is_the_free_form() {
    let a = [1u8; 4];
    let b = [2u8; 2];
    let mut span_a = ByteSpan::from(&a[..]);
    let mut span_b = ByteSpan::from(&b[..]);

    core::mem::swap(&mut span_a, &mut span_b);

    assert_eq!(span_a.as_ptr(), b.as_ptr());
    assert_eq!(span_a.len(), 2);
    assert_eq!(span_b.as_ptr(), a.as_ptr());
    assert_eq!(span_b.len(), 4);
}

#[test]
fn fixed_extent_spans_swap() {
    let a = [1u8; 4];
    let b = [2u8; 4];
    let mut span_a: ByteSpan<'_, Fixed<4>> = ByteSpan::from(&a);
    let mut span_b: ByteSpan<'_, Fixed<4>> = ByteSpan::from(&b);

    span_a.swap(&mut span_b);

    assert_eq!(span_a.as_ptr(), b.as_ptr());
    assert_eq!(span_b.as_ptr(), a.as_ptr());
}

#[test]
fn mutable_spans_swap_and_write_to_new_targets() {
    let mut a = [0u8; 2];
    let mut b = [0u8; 3];
    {
        let mut span_a = ByteSpanMut::from(&mut a[..]);
        let mut span_b = ByteSpanMut::from(&mut b[..]);

        span_a.swap(&mut span_b);

        // span_a now writes into b, span_b into a
        span_a[0] = 1;
        span_b[0] = 2;
        assert_eq!(span_a.len(), 3);
        assert_eq!(span_b.len(), 2);
    }
    assert_eq!(a, [2, 0]);
    assert_eq!(b, [1, 0, 0]);
}
