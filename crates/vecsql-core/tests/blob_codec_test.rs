//! Tests for the binary codec and host value dispatch.

use rusqlite::types::ValueRef;

use vecsql_core::codec::{parse_value, read_blob, write_blob};
use vecsql_core::constants::MAX_DIMENSIONS;
use vecsql_core::errors::CodecError;
use vecsql_core::{Vector, VectorType};

const ONE_TWO_THREE: [u8; 12] = [
    0x00, 0x00, 0x80, 0x3F, // 1.0
    0x00, 0x00, 0x00, 0x40, // 2.0
    0x00, 0x00, 0x40, 0x40, // 3.0
];

#[test]
fn literal_encodes_to_little_endian_floats() {
    let v: Vector<'static> = "[1,2,3]".parse().unwrap();
    assert_eq!(v.to_blob(), ONE_TWO_THREE.to_vec());
}

#[test]
fn blob_decodes_back_to_literal() {
    let v = read_blob(VectorType::Float32, &ONE_TWO_THREE).unwrap();
    assert_eq!(v.dims(), 3);
    assert_eq!(v.to_literal(), "[1,2,3]");
}

#[test]
fn view_over_blob_borrows_and_matches_copy() {
    let storage = ONE_TWO_THREE.to_vec();
    let view = Vector::from_blob(VectorType::Float32, &storage).unwrap();
    let copy = read_blob(VectorType::Float32, &storage).unwrap();
    assert!(view.is_borrowed());
    assert!(!copy.is_borrowed());
    assert_eq!(view.as_bytes().as_ptr(), storage.as_ptr());
    assert_eq!(view, copy);
}

#[test]
fn unaligned_blob_views_work() {
    let mut storage = vec![0xAAu8];
    storage.extend_from_slice(&ONE_TWO_THREE);
    let view = Vector::from_blob(VectorType::Float32, &storage[1..]).unwrap();
    assert_eq!(view.to_f32_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn empty_blob_is_zero_dimensions() {
    assert_eq!(read_blob(VectorType::Float32, &[]).unwrap().dims(), 0);
    assert_eq!(Vector::from_blob(VectorType::Float32, &[]).unwrap().dims(), 0);
}

#[test]
fn blob_length_must_be_a_multiple_of_four() {
    for len in [1usize, 2, 3, 5, 13] {
        let bytes = vec![0u8; len];
        assert_eq!(
            read_blob(VectorType::Float32, &bytes),
            Err(CodecError::InvalidBlobLength { len, element_size: 4 })
        );
        assert!(Vector::from_blob(VectorType::Float32, &bytes).is_err());
    }
}

#[test]
fn blob_at_max_dimensions_decodes() {
    let bytes = vec![0u8; MAX_DIMENSIONS * 4];
    assert_eq!(read_blob(VectorType::Float32, &bytes).unwrap().dims(), MAX_DIMENSIONS);
}

#[test]
fn blob_over_max_dimensions_fails() {
    let bytes = vec![0u8; (MAX_DIMENSIONS + 1) * 4];
    assert_eq!(
        read_blob(VectorType::Float32, &bytes),
        Err(CodecError::TooManyDimensions { max: MAX_DIMENSIONS })
    );
}

#[test]
fn write_blob_into_exact_and_larger_buffers() {
    let v = read_blob(VectorType::Float32, &ONE_TWO_THREE).unwrap();

    let mut exact = [0u8; 12];
    assert_eq!(write_blob(&v, &mut exact).unwrap(), 12);
    assert_eq!(exact, ONE_TWO_THREE);

    let mut larger = [0xFFu8; 16];
    assert_eq!(write_blob(&v, &mut larger).unwrap(), 12);
    assert_eq!(&larger[..12], &ONE_TWO_THREE);
    assert_eq!(&larger[12..], &[0xFF; 4]);
}

#[test]
fn write_blob_into_short_buffer_fails_untouched() {
    let v = read_blob(VectorType::Float32, &ONE_TWO_THREE).unwrap();
    let mut short = [0xEEu8; 11];
    assert_eq!(
        write_blob(&v, &mut short),
        Err(CodecError::BufferTooSmall { required: 12, available: 11 })
    );
    assert_eq!(short, [0xEE; 11]);
}

#[test]
fn parse_value_dispatches_on_kind() {
    let from_text = parse_value(VectorType::Float32, ValueRef::Text(b"[1,2,3]")).unwrap();
    let from_blob = parse_value(VectorType::Float32, ValueRef::Blob(&ONE_TWO_THREE)).unwrap();
    assert_eq!(from_text, from_blob);
}

#[test]
fn parse_value_rejects_other_kinds() {
    assert_eq!(
        parse_value(VectorType::Float32, ValueRef::Null),
        Err(CodecError::InvalidInputKind { kind: "NULL" })
    );
    assert_eq!(
        parse_value(VectorType::Float32, ValueRef::Integer(3)),
        Err(CodecError::InvalidInputKind { kind: "INTEGER" })
    );
    assert_eq!(
        parse_value(VectorType::Float32, ValueRef::Real(1.5)),
        Err(CodecError::InvalidInputKind { kind: "REAL" })
    );
}
