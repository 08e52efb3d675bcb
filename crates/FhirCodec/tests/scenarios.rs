mod common;

use common::*;
use fhir_codec::{
    ChoicePolicy, CodecError, CodecOptions, Extension, FhirCodec, FhirVersion, FieldPath,
    PrimitiveValue, Resource, UnknownFieldPolicy, Value,
};
use rust_decimal_macros::dec;
use serde_json::json;

#[cfg(feature = "R4")]
fn r4() -> FhirCodec {
    FhirCodec::new(FhirVersion::R4)
}

#[cfg(feature = "R4")]
fn r4_with(options: CodecOptions) -> FhirCodec {
    FhirCodec::with_options(FhirVersion::R4, options)
}

#[cfg(feature = "STU3")]
mod stu3_careplan {
    use super::*;
    use fhir_codec::stu3::{self, CarePlanActivityStatus, CarePlanIntent, CarePlanStatus, GoalStatus};

    #[test]
    fn status_fields_decode_to_typed_codes() {
        init_tracing();
        let careplan = load(FhirVersion::Stu3, "careplan.json");
        assert_eq!(careplan.version(), FhirVersion::Stu3);
        assert_eq!(careplan.kind::<stu3::ResourceType>(), Some(stu3::ResourceType::CarePlan));
        assert_eq!(careplan.id(), Some("f003"));

        let root = careplan.root();
        assert_eq!(root.code::<CarePlanStatus>("status"), Some(CarePlanStatus::Completed));
        assert_eq!(root.code::<CarePlanIntent>("intent"), Some(CarePlanIntent::Plan));
        assert_eq!(
            careplan
                .at("activity[0].detail.status")
                .and_then(Value::as_code::<CarePlanActivityStatus>),
            Some(CarePlanActivityStatus::Completed)
        );
        assert_eq!(
            careplan.at("activity[0].detail.scheduledString").and_then(Value::as_str),
            Some("2011-06-27T09:30:10+01:00")
        );
        assert_eq!(
            careplan
                .at("activity[0].detail.prohibited")
                .and_then(Value::as_primitive)
                .and_then(|p| p.value())
                .and_then(PrimitiveValue::as_bool),
            Some(true)
        );
    }

    #[test]
    fn goal_reference_resolves_to_the_contained_goal() {
        let careplan = load(FhirVersion::Stu3, "careplan.json");
        let reference = careplan.at("goal[0].reference").and_then(Value::as_str).expect("goal reference");
        assert_eq!(reference, "#goal");

        let goal = careplan.contained_by_id(reference).expect("contained goal");
        assert_eq!(goal.resource_type(), "Goal");
        assert_eq!(goal.root().code::<GoalStatus>("status"), Some(GoalStatus::Achieved));
        assert_eq!(goal.at("description.text").and_then(Value::as_str), Some("Retropharyngeal abscess removal"));
        assert!(careplan.contained_by_id("#nothing").is_none());
        assert_eq!(careplan.contained().count(), 1);
    }
}

#[cfg(feature = "R4")]
mod r4_careplan {
    use super::*;
    use fhir_codec::r4::{CarePlanActivityKind, CarePlanIntent, GoalLifecycleStatus, RequestStatus};

    #[test]
    fn status_binds_to_request_status() {
        let careplan = load(FhirVersion::R4, "careplan.json");
        let root = careplan.root();
        assert_eq!(root.code::<RequestStatus>("status"), Some(RequestStatus::Completed));
        assert_eq!(root.code::<CarePlanIntent>("intent"), Some(CarePlanIntent::Plan));
        assert_eq!(
            careplan.at("activity[0].detail.kind").and_then(Value::as_code::<CarePlanActivityKind>),
            Some(CarePlanActivityKind::ServiceRequest)
        );

        let goal = careplan.contained_by_id("goal").expect("contained goal");
        assert_eq!(
            goal.root().code::<GoalLifecycleStatus>("lifecycleStatus"),
            Some(GoalLifecycleStatus::Completed)
        );
    }

    #[test]
    fn unknown_status_code_names_its_system() {
        let mut value = fixture_json(FhirVersion::R4, "careplan.json");
        value["status"] = json!("finished");
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::UnknownCode {
                path: FieldPath::from("status"),
                system: "http://hl7.org/fhir/request-status".to_string(),
                value: "finished".to_string(),
            })
        );
    }

    #[test]
    fn missing_nested_status_reports_the_full_path() {
        let mut value = fixture_json(FhirVersion::R4, "careplan.json");
        value["activity"][0]["detail"]
            .as_object_mut()
            .expect("detail object")
            .remove("status");
        let err = r4().decode(None, &value).expect_err("status is required");
        assert_eq!(err, CodecError::MissingRequiredField(FieldPath::from("activity[0].detail.status")));
        assert_eq!(err.to_string(), "missing required field `activity[0].detail.status`");
    }

    #[test]
    fn missing_status_inside_a_contained_goal() {
        let mut value = fixture_json(FhirVersion::R4, "careplan.json");
        value["contained"][0]
            .as_object_mut()
            .expect("goal object")
            .remove("lifecycleStatus");
        let err = r4().decode(None, &value).expect_err("lifecycleStatus is required");
        assert_eq!(
            err.path().map(ToString::to_string).as_deref(),
            Some("contained[0].lifecycleStatus")
        );
    }
}

#[cfg(feature = "R4")]
mod observation {
    use super::*;
    use fhir_codec::r4::ObservationStatus;

    #[test]
    fn value_quantity_is_the_only_populated_variant() {
        let observation = load(FhirVersion::R4, "observation.json");
        assert_eq!(
            observation.root().code::<ObservationStatus>("status"),
            Some(ObservationStatus::Final)
        );

        let value = observation.root().choice("value").expect("value[x]");
        assert_eq!(value.suffix(), "Quantity");
        assert_eq!(value.key("value"), "valueQuantity");

        let amount = observation.at("valueQuantity.value").and_then(Value::as_decimal).expect("decimal");
        assert_eq!(amount.original_string(), "185");
        assert_eq!(amount.value(), Some(dec!(185)));
        assert_eq!(observation.at("value.unit").and_then(Value::as_str), Some("lbs"));
        assert!(observation.at("valueString").is_none());

        let encoded = r4().encode(&observation).expect("encodes");
        let value_keys: Vec<&String> = encoded
            .as_object()
            .expect("object")
            .keys()
            .filter(|key| key.starts_with("value") || key.starts_with("_value"))
            .collect();
        assert_eq!(value_keys, vec!["valueQuantity"]);
    }

    #[test]
    fn two_variants_of_one_choice_are_ambiguous() {
        let value = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "mood"},
            "valueBoolean": true,
            "valueString": "cheerful"
        });
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::AmbiguousChoiceField {
                path: FieldPath::from("value"),
                suffixes: vec!["String".to_string(), "Boolean".to_string()],
            })
        );

        let lenient = r4_with(CodecOptions::default().with_choice_policy(ChoicePolicy::FirstDeclared));
        let observation = lenient.decode(None, &value).expect("first declared wins");
        assert_eq!(observation.root().choice("value").map(|c| c.suffix()), Some("String"));
        let encoded = lenient.encode(&observation).expect("encodes");
        assert_eq!(encoded["valueString"], json!("cheerful"));
        assert!(encoded.get("valueBoolean").is_none());
    }

    #[test]
    fn ambiguity_inside_a_component_carries_its_path() {
        let value = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "blood pressure"},
            "component": [
                {"code": {"text": "systolic"}, "valueQuantity": {"value": 120}},
                {"code": {"text": "diastolic"}, "valueQuantity": {"value": 80}, "valueInteger": 80}
            ]
        });
        let err = r4().decode(None, &value).expect_err("ambiguous");
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("component[1].value"));
    }

    #[test]
    fn extension_sibling_of_a_complex_variant_is_unknown() {
        let value = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "weight"},
            "valueQuantity": {"value": 70},
            "_valueQuantity": {"id": "q"}
        });
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::UnknownField(FieldPath::from("_valueQuantity")))
        );
    }

    #[test]
    fn decimals_keep_their_literal() {
        let text = r#"{
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "glucose"},
            "valueQuantity": {"value": 1.50, "unit": "mmol/L"}
        }"#;
        let observation = r4().to_fhir(Some("Observation"), text).expect("valid");
        let amount = observation.at("valueQuantity.value").and_then(Value::as_decimal).expect("decimal");
        assert_eq!(amount.original_string(), "1.50");
        assert_eq!(amount.value(), Some(dec!(1.5)));

        let text = r4().from_fhir(&observation).expect("encodes");
        assert!(text.contains(r#""value":1.50"#), "{}", text);
    }

    #[test]
    fn quoted_decimals_stay_quoted() {
        let value = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "glucose"},
            "valueQuantity": {"value": "185"}
        });
        let observation = r4().decode(None, &value).expect("valid");
        let primitive = observation
            .at("valueQuantity.value")
            .and_then(Value::as_primitive)
            .expect("primitive");
        assert!(matches!(
            primitive.value(),
            Some(PrimitiveValue::Decimal { quoted: true, .. })
        ));
        assert_eq!(r4().encode(&observation).expect("encodes"), value);

        let bad = json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "glucose"},
            "valueQuantity": {"value": "lots"}
        });
        assert!(matches!(
            r4().decode(None, &bad),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "valueQuantity.value"
        ));
    }
}

#[cfg(feature = "R4")]
mod primitives {
    use super::*;
    use fhir_codec::r4::AdministrativeGender;

    const BIRTH_TIME: &str = "http://hl7.org/fhir/StructureDefinition/patient-birthTime";

    fn patient() -> Resource {
        load(FhirVersion::R4, "patient.json")
    }

    #[test]
    fn birth_date_carries_its_extension() {
        let patient = patient();
        let birth_date = patient.root().primitive("birthDate").expect("birthDate");
        assert_eq!(birth_date.as_str(), Some("1974-12-25"));
        assert!(birth_date.has_side_channel());

        let birth_time = Extension::find(birth_date.extensions(), BIRTH_TIME).expect("birthTime");
        let value = birth_time.value().expect("value[x]");
        assert_eq!(value.suffix(), "DateTime");
        assert_eq!(value.value().as_str(), Some("1974-12-25T14:35:45-05:00"));

        let gender = patient.root().primitive("gender").expect("gender");
        assert!(!gender.has_side_channel());
        assert_eq!(patient.root().code::<AdministrativeGender>("gender"), Some(AdministrativeGender::Male));
    }

    #[test]
    fn plain_primitives_get_no_sibling() {
        let encoded = r4().encode(&patient()).expect("encodes");
        assert!(encoded.get("_birthDate").is_some());
        for key in ["_gender", "_active", "_id"] {
            assert!(encoded.get(key).is_none(), "unexpected {}", key);
        }
        assert!(encoded["name"][0].get("_given").is_none());
        assert!(encoded["name"][1].get("_given").is_some());
    }

    #[test]
    fn parallel_arrays_line_up() {
        let patient = patient();
        let first = patient.at("name[1].given[0]").and_then(Value::as_primitive).expect("given[0]");
        assert_eq!(first.as_str(), Some("Peter"));
        assert!(!first.has_side_channel());

        let second = patient.at("name[1].given[1]").and_then(Value::as_primitive).expect("given[1]");
        assert_eq!(second.value(), None);
        assert_eq!(second.id(), Some("middle"));
        assert_eq!(second.extensions().len(), 1);
        assert_eq!(
            second.extensions()[0].value().and_then(|v| v.value().as_str()),
            Some("MID")
        );
    }

    #[test]
    fn extension_only_primitive_has_no_value_member() {
        let value = json!({
            "resourceType": "Patient",
            "_birthDate": {
                "extension": [
                    {"url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason", "valueCode": "asked-declined"}
                ]
            }
        });
        let patient = r4().decode(None, &value).expect("valid");
        let birth_date = patient.root().primitive("birthDate").expect("slot populated");
        assert_eq!(birth_date.value(), None);
        assert_eq!(r4().encode(&patient).expect("encodes"), value);
    }

    #[test]
    fn explicit_null_needs_a_sibling() {
        let value = json!({"resourceType": "Patient", "birthDate": null});
        assert!(matches!(
            r4().decode(None, &value),
            Err(CodecError::UnexpectedJsonShape { ref path, .. }) if path.to_string() == "birthDate"
        ));
    }

    #[test]
    fn null_entry_without_extension_is_malformed() {
        let value = json!({"resourceType": "Patient", "name": [{"given": ["Peter", null]}]});
        assert!(matches!(
            r4().decode(None, &value),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "name[0].given[1]"
        ));
    }

    #[test]
    fn parallel_arrays_must_have_equal_length() {
        let value = json!({
            "resourceType": "Patient",
            "name": [{"given": ["Peter", "James"], "_given": [null]}]
        });
        assert!(matches!(
            r4().decode(None, &value),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "name[0].given"
        ));
    }

    #[test]
    fn integers_are_range_checked() {
        let value = json!({
            "resourceType": "Patient",
            "telecom": [{"system": "phone", "value": "555", "rank": 0}]
        });
        assert!(matches!(
            r4().decode(None, &value),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "telecom[0].rank"
        ));

        let fractional = json!({"resourceType": "Patient", "multipleBirthInteger": 2.5});
        assert!(matches!(
            r4().decode(None, &fractional),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "multipleBirthInteger"
        ));
    }

    #[test]
    fn booleans_are_not_coerced_from_strings() {
        let value = json!({"resourceType": "Patient", "active": "true"});
        assert!(matches!(
            r4().decode(None, &value),
            Err(CodecError::UnexpectedJsonShape { ref path, .. }) if path.to_string() == "active"
        ));
    }

    #[test]
    fn extension_without_url_is_rejected() {
        let value = json!({"resourceType": "Patient", "extension": [{"valueString": "x"}]});
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::MissingRequiredField(FieldPath::from("extension[0].url")))
        );
    }

    #[test]
    fn nested_extensions_round_trip() {
        let value = json!({
            "resourceType": "Patient",
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/patient-nationality",
                "extension": [
                    {"url": "code", "valueCodeableConcept": {"text": "Dutch"}},
                    {"url": "period", "valuePeriod": {"start": "2001"}}
                ]
            }],
            "modifierExtension": [
                {"url": "http://example.org/fhir/StructureDefinition/trial", "valueBoolean": true}
            ]
        });
        let patient = r4().decode(None, &value).expect("valid");
        let nationality = &patient.root().extensions()[0];
        assert_eq!(nationality.extensions().len(), 2);
        assert!(nationality.value().is_none());
        assert_eq!(
            Extension::find(nationality.extensions(), "period").and_then(|e| e.value()).map(|v| v.suffix()),
            Some("Period")
        );
        assert_eq!(patient.root().modifier_extensions().len(), 1);
        assert_eq!(r4().encode(&patient).expect("encodes"), value);
    }

    #[test]
    fn empty_arrays_survive_but_empty_extension_lists_do_not() {
        let names = json!({"resourceType": "Patient", "name": []});
        let patient = r4().decode(None, &names).expect("valid");
        assert_eq!(r4().encode(&patient).expect("encodes"), names);

        let extensions = json!({"resourceType": "Patient", "extension": []});
        let patient = r4().decode(None, &extensions).expect("valid");
        assert_eq!(
            r4().from_fhir(&patient).expect("encodes"),
            r#"{"resourceType":"Patient"}"#
        );
    }
}

#[cfg(feature = "R4")]
mod temporal {
    use super::*;

    fn strict() -> FhirCodec {
        r4_with(CodecOptions::default().with_validate_temporal(true))
    }

    #[test]
    fn invalid_dates_pass_unless_validation_is_enabled() {
        let value = json!({"resourceType": "Patient", "birthDate": "1974-13-45"});

        let patient = r4().decode(None, &value).expect("lenient by default");
        let birth_date = patient.root().primitive("birthDate").and_then(|p| p.value()).expect("value");
        assert_eq!(birth_date.as_str(), Some("1974-13-45"));
        assert!(birth_date.as_date().is_none());

        assert!(matches!(
            strict().decode(None, &value),
            Err(CodecError::MalformedPrimitive { ref path, .. }) if path.to_string() == "birthDate"
        ));
    }

    #[test]
    fn partial_precision_is_valid() {
        let value = json!({
            "resourceType": "Patient",
            "birthDate": "1974-12",
            "deceasedDateTime": "2015-02-07T13:28:17+02:00"
        });
        let patient = strict().decode(None, &value).expect("valid");
        let birth_date = patient.root().primitive("birthDate").and_then(|p| p.value()).expect("value");
        assert_eq!(birth_date.as_date().and_then(|d| d.month()), Some(12));

        let deceased = patient.at("deceasedDateTime").and_then(Value::as_primitive).and_then(|p| p.value());
        assert_eq!(
            deceased.and_then(PrimitiveValue::as_date_time).and_then(|dt| dt.timezone_offset()),
            Some(120)
        );
    }

    #[test]
    fn fixtures_pass_strict_validation() {
        for version in FhirVersion::all() {
            let codec = FhirCodec::with_options(*version, CodecOptions::default().with_validate_temporal(true));
            for path in fixtures(*version) {
                let text = std::fs::read_to_string(&path).expect("readable fixture");
                codec
                    .to_fhir(None, &text)
                    .unwrap_or_else(|e| panic!("{:?}: {}", path, e));
            }
        }
    }
}

#[cfg(feature = "R4")]
mod unknown_fields {
    use super::*;

    #[test]
    fn nested_unknown_member_is_reported_with_its_path() {
        let value = json!({"resourceType": "Patient", "name": [{"family": "Chalmers", "nickname": "Pete"}]});
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::UnknownField(FieldPath::from("name[0].nickname")))
        );
    }

    #[test]
    fn sibling_of_a_complex_field_is_unknown() {
        let value = json!({"resourceType": "Patient", "_managingOrganization": {"id": "x"}});
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::UnknownField(FieldPath::from("_managingOrganization")))
        );
    }

    #[test]
    fn ignore_policy_drops_members() {
        let codec = r4_with(CodecOptions::default().with_unknown_fields(UnknownFieldPolicy::Ignore));
        let value = json!({
            "resourceType": "Patient",
            "name": [{"family": "Chalmers", "nickname": "Pete"}],
            "_birthDate": {"colour": "blue"},
            "birthDate": "1974-12-25"
        });
        let patient = codec.decode(None, &value).expect("ignored");
        assert_eq!(
            codec.encode(&patient).expect("encodes"),
            json!({"resourceType": "Patient", "name": [{"family": "Chalmers"}], "birthDate": "1974-12-25"})
        );
    }
}

#[cfg(feature = "R4")]
mod options {
    use super::*;

    #[test]
    fn options_load_from_json() {
        let options: CodecOptions = serde_json::from_str(
            r#"{"maxDepth":8,"unknownFields":"ignore","choicePolicy":"firstDeclared","validateTemporal":true}"#,
        )
        .expect("valid options");
        assert_eq!(
            options,
            CodecOptions::default()
                .with_max_depth(8)
                .with_unknown_fields(UnknownFieldPolicy::Ignore)
                .with_choice_policy(ChoicePolicy::FirstDeclared)
                .with_validate_temporal(true)
        );

        let partial: CodecOptions = serde_json::from_str(r#"{"maxDepth":16}"#).expect("valid options");
        assert_eq!(partial, CodecOptions::default().with_max_depth(16));
        assert!(serde_json::from_str::<CodecOptions>(r#"{"unknownFields":"warn"}"#).is_err());
    }

    #[test]
    fn loaded_options_drive_the_codec() {
        let options: CodecOptions = serde_json::from_str(r#"{"maxDepth":3}"#).expect("valid options");
        let codec = r4_with(options);
        assert_eq!(codec.options().max_depth, 3);

        let shallow = json!({"resourceType": "Patient", "identifier": [{"period": {"start": "2001"}}]});
        assert!(codec.decode(None, &shallow).is_ok());

        let deep = json!({
            "resourceType": "Patient",
            "identifier": [{"assigner": {"identifier": {"value": "x"}}}]
        });
        assert_eq!(
            codec.decode(None, &deep),
            Err(CodecError::DepthLimitExceeded(FieldPath::from("identifier[0].assigner.identifier")))
        );
    }
}

#[cfg(feature = "R4")]
mod containers {
    use super::*;
    use fhir_codec::r4::{BundleType, HttpVerb};

    #[test]
    fn bundle_entries_are_full_resources() {
        let bundle = load(FhirVersion::R4, "bundle.json");
        assert_eq!(bundle.root().code::<BundleType>("type"), Some(BundleType::Transaction));

        let kinds: Vec<&str> = bundle
            .root()
            .elements("entry")
            .filter_map(|entry| entry.value("resource").and_then(Value::as_resource))
            .map(Resource::resource_type)
            .collect();
        assert_eq!(kinds, vec!["Patient", "Medication", "Basic"]);
        assert_eq!(
            bundle.at("entry[3].request.method").and_then(Value::as_code::<HttpVerb>),
            Some(HttpVerb::Delete)
        );

        let medication = bundle.at("entry[1].resource").and_then(Value::as_resource).expect("medication");
        assert_eq!(medication.version(), FhirVersion::R4);
        assert_eq!(
            medication.at("ingredient[0].strength.numerator.value").and_then(Value::as_decimal).map(|d| d.original_string()),
            Some("500")
        );
    }

    #[test]
    fn unknown_field_inside_an_entry_resource() {
        let mut value = fixture_json(FhirVersion::R4, "bundle.json");
        value["entry"][1]["resource"]["colour"] = json!("blue");
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::UnknownField(FieldPath::from("entry[1].resource.colour")))
        );
    }

    #[test]
    fn entry_resource_needs_a_resource_type() {
        let mut value = fixture_json(FhirVersion::R4, "bundle.json");
        value["entry"][2]["resource"]
            .as_object_mut()
            .expect("resource object")
            .remove("resourceType");
        assert_eq!(
            r4().decode(None, &value),
            Err(CodecError::MissingResourceType(FieldPath::from("entry[2].resource")))
        );
    }

    #[test]
    fn parameters_nest_parts_and_resources() {
        let parameters = load(FhirVersion::R4, "parameters.json");
        assert_eq!(
            parameters.at("parameter[0].valueBoolean").and_then(Value::as_primitive).and_then(|p| p.value()),
            Some(&PrimitiveValue::Boolean(true))
        );
        assert_eq!(
            parameters.at("parameter[1].valueDecimal").and_then(Value::as_decimal).map(|d| d.original_string()),
            Some("0.750")
        );
        assert_eq!(
            parameters.at("parameter[2].part[1].valueCodeableConcept.coding[0].code").and_then(Value::as_str),
            Some("271649006")
        );
        let patient = parameters.at("parameter[3].resource").and_then(Value::as_resource).expect("patient");
        assert_eq!(patient.resource_type(), "Patient");
        assert_eq!(patient.at("name[0].given[1]").and_then(Value::as_str), Some("James"));
    }
}

#[cfg(feature = "STU3")]
mod stu3_bundle {
    use super::*;
    use fhir_codec::stu3::{ConditionClinicalStatus, SearchEntryMode};

    #[test]
    fn contained_organisation_inside_an_entry() {
        let bundle = load(FhirVersion::Stu3, "bundle.json");
        let patient = bundle.at("entry[0].resource").and_then(Value::as_resource).expect("patient");
        let reference = patient.at("managingOrganization.reference").and_then(Value::as_str).expect("reference");
        let organisation = patient.contained_by_id(reference).expect("contained organisation");
        assert_eq!(organisation.resource_type(), "Organization");
        assert_eq!(organisation.root().string("name"), Some("Good Health Clinic"));
        assert_eq!(
            organisation.at("contact[0].telecom[0].value").and_then(Value::as_str),
            Some("desk@example.org")
        );
    }

    #[test]
    fn search_scores_and_codes() {
        let bundle = load(FhirVersion::Stu3, "bundle.json");
        assert_eq!(
            bundle.at("entry[0].search.score").and_then(Value::as_decimal).map(|d| d.original_string()),
            Some("1.0")
        );
        assert_eq!(
            bundle.at("entry[1].search.mode").and_then(Value::as_code::<SearchEntryMode>),
            Some(SearchEntryMode::Include)
        );
        assert_eq!(
            bundle.at("entry[2].resource.clinicalStatus").and_then(Value::as_code::<ConditionClinicalStatus>),
            Some(ConditionClinicalStatus::Resolved)
        );
    }

    #[test]
    fn resource_level_extension_is_readable() {
        let patient = load(FhirVersion::Stu3, "patient.json");
        let maiden = Extension::find(
            patient.root().extensions(),
            "http://hl7.org/fhir/StructureDefinition/patient-mothersMaidenName",
        )
        .expect("extension");
        assert_eq!(maiden.value().map(|v| v.suffix()), Some("String"));
        assert_eq!(maiden.value().and_then(|v| v.value().as_str()), Some("Williams"));
        assert_eq!(
            patient.at("contact[0].name.family").and_then(Value::as_primitive).map(|p| p.extensions().len()),
            Some(1)
        );
    }
}

#[cfg(feature = "R4")]
#[test]
fn decoded_graphs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
    assert_send_sync::<FhirCodec>();

    let codec = r4();
    let text = read_fixture(FhirVersion::R4, "bundle.json");
    let decoded: Vec<Resource> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| codec.to_fhir(Some("Bundle"), &text).expect("decodes")))
            .collect();
        handles.into_iter().map(|h| h.join().expect("thread finished")).collect()
    });
    assert!(decoded.windows(2).all(|pair| pair[0] == pair[1]));
}
