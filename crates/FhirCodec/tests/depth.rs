//! Nesting limits on hostile or simply very deep documents.
#![cfg(feature = "R4")]

mod common;

use std::thread;

use common::init_tracing;
use fhir_codec::{CodecError, CodecOptions, FhirCodec, FhirVersion, PathSegment};
use serde_json::{Value, json};

/// A `Basic` resource holding `levels` resources nested through `contained`.
fn contained_chain(levels: usize) -> Value {
    let mut value = json!({ "resourceType": "Basic", "code": {} });
    for _ in 0..levels {
        value = json!({
            "resourceType": "Basic",
            "code": {},
            "contained": [value],
        });
    }
    value
}

/// A `Patient` whose first extension nests `levels` extensions deep.
fn extension_chain(levels: usize) -> Value {
    let mut value = json!({ "url": "http://example.org/fhir/deep", "valueString": "bottom" });
    for _ in 1..levels {
        value = json!({ "url": "http://example.org/fhir/deep", "extension": [value] });
    }
    json!({ "resourceType": "Patient", "extension": [value] })
}

fn repeated(segments: &[PathSegment], field: &str) -> bool {
    segments.chunks(2).all(|pair| {
        matches!(pair, [PathSegment::Field(name), PathSegment::Index(0)] if name == field)
    })
}

#[test]
fn contained_chains_stop_at_the_default_limit() {
    init_tracing();
    let codec = FhirCodec::new(FhirVersion::R4);
    assert_eq!(codec.options().max_depth, 64);

    let err = codec
        .decode(None, &contained_chain(100))
        .expect_err("100 nested resources");
    let CodecError::DepthLimitExceeded(path) = &err else {
        panic!("expected a depth error, got {:?}", err);
    };
    assert_eq!(path.segments().len(), 128);
    assert!(repeated(path.segments(), "contained"));
    assert!(path.to_string().starts_with("contained[0].contained[0]."));
}

#[test]
fn extension_chains_count_towards_the_limit() {
    let codec = FhirCodec::new(FhirVersion::R4);
    let err = codec
        .decode(None, &extension_chain(80))
        .expect_err("80 nested extensions");
    let CodecError::DepthLimitExceeded(path) = &err else {
        panic!("expected a depth error, got {:?}", err);
    };
    assert_eq!(path.segments().len(), 128);
    assert!(repeated(path.segments(), "extension"));

    let shallow = extension_chain(32);
    let resource = codec.decode(None, &shallow).expect("32 nested extensions");
    assert_eq!(codec.encode(&resource).expect("encodes"), shallow);
}

#[test]
fn custom_limit_counts_complex_elements() {
    let codec = FhirCodec::with_options(FhirVersion::R4, CodecOptions::default().with_max_depth(6));

    // The innermost `code` sits one level below its resource.
    let fits = contained_chain(4);
    let resource = codec.decode(None, &fits).expect("six levels");
    assert_eq!(codec.encode(&resource).expect("encodes"), fits);

    let err = codec.decode(None, &contained_chain(5)).expect_err("seven levels");
    assert!(matches!(err, CodecError::DepthLimitExceeded(_)));
    let path = err.path().expect("depth errors carry a path");
    assert_eq!(path.segments().len(), 11);
    assert!(path.to_string().ends_with("contained[0].code"));
}

#[cfg(feature = "STU3")]
#[test]
fn limit_applies_to_every_release() {
    let codec = FhirCodec::new(FhirVersion::Stu3);
    let err = codec.decode(None, &contained_chain(70)).expect_err("70 nested resources");
    assert!(matches!(err, CodecError::DepthLimitExceeded(_)));
}

#[test]
fn deep_documents_decode_on_a_small_stack() {
    let worker = thread::Builder::new()
        .name("small-stack".to_string())
        .stack_size(1 << 22)
        .spawn(|| {
            let codec = FhirCodec::new(FhirVersion::R4);
            let document = contained_chain(48);
            let resource = codec.decode(None, &document).expect("48 nested resources");
            let encoded = codec.encode(&resource).expect("encodes");
            encoded == document
        })
        .expect("spawns");
    assert!(worker.join().expect("worker finished"));
}
