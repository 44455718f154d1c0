//! RFC 8428 example packs decoded, compacted and carried across every format

mod common;

use common::{at, fixed_config, init_tracing, value};
use senml_codec::json::records_from_json;
use senml_codec::units::*;
use senml_codec::*;
use time::Duration;

const DEVICE: &str = "urn:dev:ow:10e2073a01080063";

struct Example {
    name: &'static str,
    json: &'static str,
    /// Compaction reproduces `json` record for record
    encodes_back: bool,
    expected: fn() -> Vec<Measurement>,
}

fn examples() -> Vec<Example> {
    vec![
        Example {
            name: "single data point",
            json: r#"[{"n":"urn:dev:ow:10e2073a01080063","u":"Cel","v":23.1}]"#,
            encodes_back: true,
            expected: || vec![value(DEVICE, 23.1, CELSIUS, None)],
        },
        Example {
            name: "multiple data points",
            json: r#"[
                {"bn":"urn:dev:ow:10e2073a01080063:","n":"voltage","u":"V","v":120.1},
                {"n":"current","u":"A","v":1.2}
            ]"#,
            encodes_back: true,
            expected: || {
                vec![
                    value("urn:dev:ow:10e2073a01080063:voltage", 120.1, VOLT, None),
                    value("urn:dev:ow:10e2073a01080063:current", 1.2, AMPERE, None),
                ]
            },
        },
        Example {
            name: "relative times before a fractional base time",
            json: r#"[
                {"bn":"urn:dev:ow:10e2073a0108006:","bt":1.276020076001e+09,
                 "bu":"A","bver":5,"n":"voltage","u":"V","v":120.1},
                {"n":"current","t":-5,"v":1.2},
                {"n":"current","t":-4,"v":1.3},
                {"n":"current","t":-3,"v":1.4},
                {"n":"current","t":-2,"v":1.5},
                {"n":"current","t":-1,"v":1.6},
                {"n":"current","v":1.7}
            ]"#,
            encodes_back: false,
            expected: || {
                let base = Numeric::Float(1.276020076001e9).to_timestamp().unwrap();
                let name = "urn:dev:ow:10e2073a0108006:current";
                let mut expected = vec![value("urn:dev:ow:10e2073a0108006:voltage", 120.1, VOLT, Some(base))];
                for (offset, v) in [(-5, 1.2), (-4, 1.3), (-3, 1.4), (-2, 1.5), (-1, 1.6), (0, 1.7)] {
                    expected.push(value(name, v, AMPERE, Some(base + Duration::seconds(offset))));
                }
                expected
            },
        },
        Example {
            name: "series with base name and base time",
            json: r#"[
                {"bn":"urn:dev:ow:10e2073a01080063","bt":1.320067464e+09,"bu":"%RH","v":21.2},
                {"t":10,"v":21.3},
                {"t":20,"v":21.4},
                {"t":30,"v":21.4},
                {"t":40,"v":21.5},
                {"t":50,"v":21.5},
                {"t":60,"v":21.5},
                {"t":70,"v":21.6},
                {"t":80,"v":21.7}
            ]"#,
            encodes_back: true,
            expected: || {
                [21.2, 21.3, 21.4, 21.4, 21.5, 21.5, 21.5, 21.6, 21.7]
                    .into_iter()
                    .zip((0..).step_by(10))
                    .map(|(v, offset)| {
                        value(DEVICE, v, RELATIVE_HUMIDITY_PERCENT, Some(at(1320067464 + offset)))
                    })
                    .collect()
            },
        },
        Example {
            name: "multiple measurements",
            json: r#"[
                {"bn":"urn:dev:ow:10e2073a01080063","bt":1.320067464e+09,"bu":"%RH","v":20},
                {"u":"lon","v":24.30621},
                {"u":"lat","v":60.07965},
                {"t":60,"v":20.3},
                {"u":"lon","t":60,"v":24.30622},
                {"u":"lat","t":60,"v":60.07965},
                {"t":120,"v":20.7},
                {"u":"lon","t":120,"v":24.30623},
                {"u":"lat","t":120,"v":60.07966},
                {"u":"%EL","t":150,"v":98},
                {"t":180,"v":21.2},
                {"u":"lon","t":180,"v":24.30628},
                {"u":"lat","t":180,"v":60.07967}
            ]"#,
            encodes_back: false,
            expected: multiple_measurements,
        },
        Example {
            name: "resolved data",
            json: r#"[
                {"n":"urn:dev:ow:10e2073a01080063","u":"%RH","t":1.320067464e+09,"v":20},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lon","t":1.320067464e+09,"v":24.30621},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lat","t":1.320067464e+09,"v":60.07965},
                {"n":"urn:dev:ow:10e2073a01080063","u":"%RH","t":1.320067524e+09,"v":20.3},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lon","t":1.320067524e+09,"v":24.30622},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lat","t":1.320067524e+09,"v":60.07965},
                {"n":"urn:dev:ow:10e2073a01080063","u":"%RH","t":1.320067584e+09,"v":20.7},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lon","t":1.320067584e+09,"v":24.30623},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lat","t":1.320067584e+09,"v":60.07966},
                {"n":"urn:dev:ow:10e2073a01080063","u":"%EL","t":1.320067614e+09,"v":98},
                {"n":"urn:dev:ow:10e2073a01080063","u":"%RH","t":1.320067644e+09,"v":21.2},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lon","t":1.320067644e+09,"v":24.30628},
                {"n":"urn:dev:ow:10e2073a01080063","u":"lat","t":1.320067644e+09,"v":60.07967}
            ]"#,
            encodes_back: false,
            expected: multiple_measurements,
        },
        Example {
            name: "multiple data types",
            json: r#"[
                {"bn":"urn:dev:ow:10e2073a01080063:","n":"temp","u":"Cel","v":23.1},
                {"n":"label","vs":"Machine Room"},
                {"n":"open","vb":false},
                {"n":"nfc-reader","vd":"aGkgCg=="}
            ]"#,
            encodes_back: false,
            expected: || {
                let attrs = |name: &str| Attributes::new(format!("{DEVICE}:{name}"));
                vec![
                    value("urn:dev:ow:10e2073a01080063:temp", 23.1, CELSIUS, None),
                    Measurement::String(attrs("label"), "Machine Room".into()),
                    Measurement::Boolean(attrs("open"), false),
                    Measurement::Data(attrs("nfc-reader"), b"hi \n".to_vec()),
                ]
            },
        },
    ]
}

fn multiple_measurements() -> Vec<Measurement> {
    let rows: [(f64, &str, i64); 13] = [
        (20.0, RELATIVE_HUMIDITY_PERCENT, 0),
        (24.30621, LONGITUDE, 0),
        (60.07965, LATITUDE, 0),
        (20.3, RELATIVE_HUMIDITY_PERCENT, 60),
        (24.30622, LONGITUDE, 60),
        (60.07965, LATITUDE, 60),
        (20.7, RELATIVE_HUMIDITY_PERCENT, 120),
        (24.30623, LONGITUDE, 120),
        (60.07966, LATITUDE, 120),
        (98.0, REMAINING_BATTERY_PERCENT, 150),
        (21.2, RELATIVE_HUMIDITY_PERCENT, 180),
        (24.30628, LONGITUDE, 180),
        (60.07967, LATITUDE, 180),
    ];
    rows.into_iter()
        .map(|(v, unit, offset)| value(DEVICE, v, unit, Some(at(1320067464 + offset))))
        .collect()
}

#[test]
fn decode_json_examples() {
    init_tracing();
    for example in examples() {
        let decoded = decode_json_with(example.json.as_bytes(), &fixed_config())
            .unwrap_or_else(|err| panic!("{}: {err}", example.name));
        assert_eq!(decoded, (example.expected)(), "{}", example.name);
    }
}

#[test]
fn compact_reproduces_examples() {
    init_tracing();
    for example in examples().into_iter().filter(|e| e.encodes_back) {
        let expected = records_from_json(example.json.as_bytes()).unwrap();
        assert_eq!(compact(&(example.expected)()), expected, "{}", example.name);
    }
}

#[test]
fn examples_survive_every_format() {
    init_tracing();
    for example in examples() {
        // Fractional base times do not survive re-encoding to the nanosecond.
        if example.name.starts_with("relative times") {
            continue;
        }
        let measurements = (example.expected)();
        for format in [Format::Json, Format::Cbor, Format::Xml] {
            let bytes = format
                .encode(&measurements)
                .unwrap_or_else(|err| panic!("{} as {format}: {err}", example.name));
            let decoded = format.decode_with(&bytes, &fixed_config()).unwrap();
            assert_eq!(decoded, measurements, "{} as {format}", example.name);
        }
    }
}

#[test]
fn formats_agree_on_records() {
    let records = records_from_json(examples()[6].json.as_bytes()).unwrap();
    let from_cbor = cbor::records_from_cbor(&cbor::records_to_cbor(&records).unwrap()).unwrap();
    let from_xml = xml::records_from_xml(&xml::records_to_xml(&records).unwrap()).unwrap();
    assert_eq!(from_cbor, records);
    assert_eq!(from_xml, records);
}

#[test]
fn multiple_measurements_pick_first_of_tied_units() {
    let records = compact(&multiple_measurements());
    // %RH, lon and lat each cover 12 bytes
    assert_eq!(records[0].base_unit, RELATIVE_HUMIDITY_PERCENT);
    assert_eq!(records[0].base_name, DEVICE);
    assert!(matches!(records[0].base_time, Numeric::Int(1320067464)));
    assert_eq!(records[9].unit, REMAINING_BATTERY_PERCENT);
    assert!(matches!(records[9].time, Numeric::Int(150)));
}

#[test]
fn xml_document_from_rfc() {
    let xml = br#"<sensml xmlns="urn:ietf:params:xml:ns:senml">
          <senml bn="urn:dev:ow:10e2073a01080063:" n="voltage" u="V" v="120.1"></senml>
          <senml n="current" u="A" v="1.2"></senml>
        </sensml>"#;
    let decoded = decode_xml_with(xml, &fixed_config()).unwrap();
    assert_eq!(decoded, (examples()[1].expected)());
}

#[test]
fn cbor_decimal_fraction_stays_exact() {
    // [{0: "t", 1: "K", 2: 4([-2, 27115])}]
    let bytes = [
        0x81, 0xa3, 0x00, 0x61, 0x74, 0x01, 0x61, 0x4b, 0x02, 0xc4, 0x82, 0x21, 0x19, 0x69, 0xeb,
    ];
    let decoded = decode_cbor_with(&bytes, &fixed_config()).unwrap();
    assert!(matches!(
        &decoded[0],
        Measurement::Value(attrs, Numeric::Decimal(d))
            if attrs.unit == KELVIN && *d == Decimal::new(-2, 27115)
    ));
    assert_eq!(encode_cbor(&decoded).unwrap(), bytes);
}

#[test]
fn record_without_value_fails_whole_pack() {
    let json = br#"[{"n":"a","v":1},{"n":"b","u":"V"},{"n":"c","v":2}]"#;
    assert_eq!(
        decode_json_with(json, &fixed_config()).unwrap_err(),
        SenMLError::NoValue { index: 1 }
    );
}

#[test]
fn auto_time_anchors_unset_times_to_now() {
    let before = time::OffsetDateTime::now_utc();
    let decoded = decode_json(br#"[{"n":"a","v":1},{"n":"b","t":-60,"v":2}]"#).unwrap();
    let after = time::OffsetDateTime::now_utc();

    let first = decoded[0].time().unwrap();
    assert!(before <= first && first <= after);
    assert_eq!(decoded[1].time(), Some(first - Duration::seconds(60)));
}
