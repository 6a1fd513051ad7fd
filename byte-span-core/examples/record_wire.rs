use byte_span_core::{ByteSpan, ByteSpanMut, FromBytes, Immutable, IntoBytes, KnownLayout};

#[derive(IntoBytes, FromBytes, Immutable, KnownLayout, Debug)]
#[repr(C)]
struct Record {
    key: u64,
    flags: u32,
    len: u32,
}

fn main() {
    // Serializer side: view a record as bytes and append it to a wire
    // buffer without an intermediate encode step.
    let record = Record {
        key: 7,
        flags: 1,
        len: 32,
    };
    let view = ByteSpan::from_ref(&record);
    let mut wire = Vec::with_capacity(view.len());
    wire.extend_from_slice(view.as_slice());
    println!("wrote {} bytes: {:?}", wire.len(), record);

    // Patch side: flip a flag bit in place through a mutable view.
    let mut span = ByteSpanMut::from(wire.as_mut_slice());
    let flags_offset = core::mem::offset_of!(Record, flags);
    span[flags_offset] |= 0x02;
    println!("patched flags byte at offset {flags_offset}");

    // Reader side: iterate the wire bytes.
    let reader = ByteSpan::from(wire.as_slice());
    let checksum: u32 = reader.iter().map(|&byte| u32::from(byte)).sum();
    println!("checksum over {} bytes: {checksum}", reader.len());
}
