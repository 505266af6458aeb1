// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use gantry_geom::{AxisMode, CollisionConfig, CollisionManager, ConfigError, NarrowPhaseFilter};

#[test]
fn empty_document_yields_defaults() {
    let cfg = CollisionConfig::from_json_str("{}").expect("parse");
    assert_eq!(cfg, CollisionConfig::default());
    assert!((cfg.broad_phase_margin - 1.0).abs() < f64::EPSILON);
    assert_eq!(cfg.axis_mode, AxisMode::WorldAligned);
    assert_eq!(cfg.narrow_phase_filter, NarrowPhaseFilter::PositiveConvergence);
    assert!(cfg.stall_on_touch);
}

#[test]
fn parses_every_field() {
    let cfg = CollisionConfig::from_json_str(
        r#"{
            "broad_phase_margin": 0.25,
            "axis_mode": "rotated",
            "narrow_phase_filter": "closing",
            "stall_on_touch": false
        }"#,
    )
    .expect("parse");
    assert!((cfg.broad_phase_margin - 0.25).abs() < f64::EPSILON);
    assert_eq!(cfg.axis_mode, AxisMode::Rotated);
    assert_eq!(cfg.narrow_phase_filter, NarrowPhaseFilter::Closing);
    assert!(!cfg.stall_on_touch);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = CollisionConfig::from_json_str(r#"{"margin": 2.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)), "got {err:?}");
}

#[test]
fn unknown_enum_variant_is_rejected() {
    let err = CollisionConfig::from_json_str(r#"{"narrow_phase_filter": "sometimes"}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)), "got {err:?}");
}

#[test]
fn negative_margin_is_invalid() {
    let err = CollisionConfig::from_json_str(r#"{"broad_phase_margin": -1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    assert!(err.to_string().contains("broad_phase_margin"));

    let cfg = CollisionConfig {
        broad_phase_margin: f64::INFINITY,
        ..CollisionConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    assert!(CollisionManager::new(cfg).is_err());
}

#[test]
fn json_round_trip() {
    let cfg = CollisionConfig {
        broad_phase_margin: 0.5,
        axis_mode: AxisMode::Rotated,
        narrow_phase_filter: NarrowPhaseFilter::All,
        stall_on_touch: false,
    };
    let json = cfg.to_json_string().expect("serialize");
    assert!(json.contains("\"all\""));
    assert_eq!(CollisionConfig::from_json_str(&json).expect("parse"), cfg);
}
