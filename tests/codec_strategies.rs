use rowscope::{CodecOption, CodecStrategy, DataType, Error, Scalar, ValueCodec};

fn codecs() -> [ValueCodec; 2] {
    [
        ValueCodec::new(&CodecOption::default()),
        ValueCodec::new(&CodecOption::default().strategy(CodecStrategy::Custom)),
    ]
}

#[test]
fn codec_follows_option() {
    let [standard, custom] = codecs();
    assert_eq!(standard.strategy(), CodecStrategy::Standard);
    assert_eq!(custom.strategy(), CodecStrategy::Custom);
    let process = ValueCodec::new(&CodecOption::process_default());
    assert_eq!(process, ValueCodec::new(&CodecOption::process_default()));
}

#[test]
fn every_supported_type_round_trips() {
    let values = [
        Scalar::Bool(false),
        Scalar::Bool(true),
        Scalar::Int32(0),
        Scalar::Int32(i32::MIN),
        Scalar::Int32(i32::MAX),
        Scalar::Int64(-42),
        Scalar::Int64(i64::MIN),
        Scalar::Float(3.5),
        Scalar::Float(f32::INFINITY),
        Scalar::Double(-0.125),
        Scalar::Double(f64::MAX),
        Scalar::from("cell"),
        Scalar::from(""),
    ];
    for codec in codecs() {
        for value in &values {
            let ty = value.data_type();
            let encoded = codec.encode(value, ty).unwrap();
            assert_eq!(&codec.decode(&encoded, ty).unwrap(), value);
        }
    }
}

#[test]
fn standard_cells_decode_as_big_endian() {
    let [standard, _] = codecs();
    assert_eq!(
        standard.decode(&[0, 0, 0x01, 0x00], DataType::Int32),
        Ok(Scalar::Int32(256))
    );
    assert_eq!(
        standard.decode(&[0x40, 0x49, 0x0f, 0xdb], DataType::Float),
        Ok(Scalar::Float(std::f32::consts::PI))
    );
    assert_eq!(
        standard.decode(&[0, 0, 0, 0, 0, 0, 0, 1], DataType::Int64),
        Ok(Scalar::Int64(1))
    );
}

#[test]
fn decode_rejects_wrong_widths_for_numeric_types() {
    let fixed = [
        DataType::Bool,
        DataType::Int32,
        DataType::Int64,
        DataType::Float,
        DataType::Double,
    ];
    for codec in codecs() {
        for ty in fixed {
            let width = ty.fixed_width().unwrap();
            for len in [0, 1, width - 1, width + 1, 16] {
                let err = codec.decode(&vec![0u8; len], ty).unwrap_err();
                assert_eq!(
                    err,
                    Error::MalformedInput {
                        data_type: ty,
                        expected: width,
                        actual: len,
                    }
                );
            }
        }
    }
}

#[test]
fn unsupported_types_fail_both_ways() {
    for codec in codecs() {
        for ty in [DataType::Int16, DataType::UInt8, DataType::UInt32] {
            assert!(matches!(
                codec.decode(&[0; 4], ty),
                Err(Error::UnsupportedType { .. })
            ));
            assert!(matches!(
                codec.encode(&Scalar::Int32(1), ty),
                Err(Error::UnsupportedType { .. })
            ));
        }
    }
}
