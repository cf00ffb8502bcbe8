// Property tests for slot marshaling.
//
// Tests cover: scalar round trips through encode and decode, range
// rejection, string round trips, falsy-value short-circuiting and
// byte-order independence.

use crate::common::{Objects, Repository};
use gi_marshal::{
    ByteOrder, MarshalConfig, MarshalError, Marshaller, Slot, StringArena, TypeTag, Value,
};
use proptest::prelude::*;

fn round_trip(tag: TypeTag, value: Value, order: ByteOrder) -> (Slot, Option<Value>) {
    let mut repo = Repository::new();
    let info = repo.info(tag);
    let config = MarshalConfig::new().with_byte_order(order);
    let m = Marshaller::with_config(&repo, Objects { repo: &repo }, config);
    let mut arena = StringArena::new();
    let slot = m.encode_arg(&info, &value, &mut arena).unwrap();
    let back = unsafe { m.decode_ret(&info, &slot) }.unwrap();
    (slot, back)
}

fn encode(tag: TypeTag, value: Value) -> Result<Slot, MarshalError> {
    let mut repo = Repository::new();
    let info = repo.info(tag);
    let m = Marshaller::new(&repo, Objects { repo: &repo });
    let mut arena = StringArena::new();
    m.encode_arg(&info, &value, &mut arena)
}

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

// =========================================================================
// A. Scalar round trips
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn int8_round_trip(n in any::<i8>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::Int8, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn uint8_round_trip(n in any::<u8>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::UInt8, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn int16_round_trip(n in any::<i16>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::Int16, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn uint16_round_trip(n in any::<u16>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::UInt16, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn int32_round_trip(n in any::<i32>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::Int32, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn uint32_round_trip(n in any::<u32>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::UInt32, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn int64_round_trip(n in any::<i64>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::Int64, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    #[test]
    fn uint64_round_trip(n in any::<u64>(), order in byte_order()) {
        let (_, back) = round_trip(TypeTag::UInt64, Value::int(n), order);
        prop_assert_eq!(back, Some(Value::int(n)));
    }

    // Exact bit match for every finite single-precision value
    #[test]
    fn float32_round_trip(f in any::<f32>().prop_filter("finite and non-zero", |f| f.is_finite() && *f != 0.0)) {
        let (_, back) = round_trip(TypeTag::Float32, Value::float(f as f64), ByteOrder::NATIVE);
        match back {
            Some(Value::Float(g)) => prop_assert_eq!((g as f32).to_bits(), f.to_bits()),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn float64_round_trip(f in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL) {
        let (_, back) = round_trip(TypeTag::Float64, Value::float(f), ByteOrder::NATIVE);
        match back {
            Some(Value::Float(g)) => prop_assert_eq!(g.to_bits(), f.to_bits()),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    // Narrow values never touch the bytes past their width
    #[test]
    fn narrow_values_leave_high_bytes_zero(n in any::<i16>(), order in byte_order()) {
        let (slot, _) = round_trip(TypeTag::Int16, Value::int(n), order);
        prop_assert_eq!(&slot.as_bytes()[2..], &[0u8; 6][..]);
    }
}

// =========================================================================
// B. Range checking
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn int8_out_of_range(n in prop_oneof![
        (i64::MIN..=-129i64),
        (128i64..=i64::MAX),
    ]) {
        let result = encode(TypeTag::Int8, Value::int(n));
        prop_assert!(
            matches!(result, Err(MarshalError::Overflow { .. })),
            "expected overflow for {}, got {:?}",
            n,
            result
        );
    }

    #[test]
    fn unsigned_rejects_negative(n in i64::MIN..=-1i64) {
        for tag in [TypeTag::UInt8, TypeTag::UInt16, TypeTag::UInt32, TypeTag::UInt64] {
            prop_assert!(encode(tag, Value::int(n)).is_err());
        }
    }

    #[test]
    fn uint32_out_of_range(n in (u32::MAX as i64 + 1)..=i64::MAX) {
        prop_assert!(encode(TypeTag::UInt32, Value::int(n)).is_err());
    }

    #[test]
    fn uint64_beyond_range(extra in 1u64..=u64::MAX) {
        let n = u64::MAX as i128 + extra as i128;
        prop_assert!(encode(TypeTag::UInt64, Value::int(n)).is_err());
    }
}

// =========================================================================
// C. Strings and absence
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn utf8_round_trip(s in "[^\\x00]{1,64}") {
        let (_, back) = round_trip(TypeTag::Utf8, Value::string(s.as_str()), ByteOrder::NATIVE);
        prop_assert_eq!(back, Some(Value::string(s.as_str())));
    }

    #[test]
    fn interior_nul_rejected(a in "[a-z]{1,8}", b in "[a-z]{0,8}") {
        let s = format!("{}\0{}", a, b);
        prop_assert_eq!(
            encode(TypeTag::Utf8, Value::string(s.as_str())),
            Err(MarshalError::InteriorNul { position: a.len() })
        );
    }

    // Falsy values are zero regardless of the declared tag
    #[test]
    fn falsy_values_always_zero(raw in 0u32..32) {
        let tag = TypeTag::from_raw(raw);
        for value in [Value::NIL, Value::bool(false), Value::int(0), Value::string("")] {
            prop_assert!(encode(tag, value).unwrap().is_zero());
        }
    }
}

// Null return slots never dereference (not inside proptest -- deterministic)
#[test]
fn null_string_return_is_nil() {
    let mut repo = Repository::new();
    let info = repo.info(TypeTag::Filename);
    let m = Marshaller::new(&repo, Objects { repo: &repo });
    assert_eq!(
        unsafe { m.decode_ret(&info, &Slot::ZERO) }.unwrap(),
        Some(Value::NIL)
    );
}
