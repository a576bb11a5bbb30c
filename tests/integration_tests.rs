// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for shredgen
//!
//! These tests verify that multiple components work together correctly.

use std::collections::HashSet;

use shredgen::cli::{self, Action};
use shredgen::config::ShredConfig;
use shredgen::music::{key_distance, key_index, non_wrapping_strings, wraps_at};
use shredgen::{
    render, shred, tune, FixedSource, GuitarString, Key, Note, RiffGenerator, Scale, ScaleCatalog,
    ShredError,
};

/// Lookup, tune and render in one pass
#[test]
fn test_lookup_tune_render_pipeline() {
    let catalog = ScaleCatalog::new();
    let a = catalog.find_by_name("A Major Pentatonic").unwrap();
    let e = tune(&catalog, a, "E").unwrap();

    assert_eq!(e.name(), "E Major Pentatonic");

    let tab = render(e.notes());
    let lines: Vec<&str> = tab.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("e|-0--1--3-"));
    assert!(lines[5].starts_with("E|-"));
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}

/// Every key has a scale, and every scale belongs to the same twelve
#[test]
fn test_catalog_is_one_closed_family() {
    let catalog = ScaleCatalog::new();
    assert_eq!(catalog.all_scales().len(), 12);

    let names: HashSet<&str> = catalog.all_scales().iter().map(Scale::name).collect();
    assert_eq!(names.len(), 12);

    for scale in catalog.all_scales() {
        let family = catalog.find_all_of_same_family(scale).unwrap();
        assert_eq!(family.len(), 12);
        assert!(family.iter().any(|s| *s == scale));
    }
}

/// Lookup ignores case and accepts any alias
#[test]
fn test_alias_lookup_returns_same_scale() {
    let catalog = ScaleCatalog::new();
    let by_short = catalog.find_by_name("amajpen").unwrap();
    let by_long = catalog.find_by_name("A Major Pentatonic").unwrap();
    let by_upper = catalog.find_by_name("AMAJPEN").unwrap();

    assert!(std::ptr::eq(by_short, by_long));
    assert!(std::ptr::eq(by_short, by_upper));
}

/// Tuning there and back lands on the starting scale
#[test]
fn test_transposition_round_trip() {
    let catalog = ScaleCatalog::new();
    let start = catalog.find_by_name("F# Maj Pen").unwrap();

    for key in Key::ALL {
        let inverse = Key::from_index(-(key.index() as i32));
        let tuned = tune(&catalog, start, key.name()).unwrap();
        let back = tune(&catalog, tuned, inverse.name()).unwrap();
        assert_eq!(back, start);
    }
}

/// Key arithmetic agrees with the catalog order
#[test]
fn test_key_distance_matches_catalog() {
    let catalog = ScaleCatalog::new();
    for scale in catalog.all_scales() {
        let distance = key_distance(scale.key().name(), "A").unwrap();
        assert_eq!(distance as usize, key_index(scale.key().name()).unwrap());
        assert_eq!(&catalog.all_scales()[distance as usize], scale);
    }
}

/// C#, D and D# let the D string climb past the twelfth fret; every
/// other string still wraps
#[test]
fn test_non_wrapping_d_string_is_intentional() {
    let catalog = ScaleCatalog::new();
    let reference = &catalog.all_scales()[0];

    for name in ["C#", "D", "D#"] {
        let offset = key_index(name).unwrap() as i32;
        assert_eq!(non_wrapping_strings(offset), &[GuitarString::D]);

        let scale = catalog.find_by_name(&format!("{}majpen", name)).unwrap();
        for (derived, original) in scale.notes().iter().zip(reference.notes()) {
            let raw = original.fret() + offset;
            if derived.string() == GuitarString::D {
                assert_eq!(derived.fret(), raw);
            } else {
                assert!(wraps_at(offset, derived.string()));
                assert_eq!(derived.fret(), raw % 12);
            }
        }
        assert!(scale
            .notes()
            .iter()
            .any(|n| n.string() == GuitarString::D && n.fret() > 11));
    }

    let cs = catalog.find_by_name("C#MajPen").unwrap();
    let high_e: Vec<i32> = cs
        .notes()
        .iter()
        .filter(|n| n.string() == GuitarString::HighE)
        .map(|n| n.fret())
        .collect();
    assert_eq!(high_e, vec![9, 10, 0]);
}

/// The riff is drawn from the looked-up scale in draw order
#[test]
fn test_lookup_shred_render() {
    let catalog = ScaleCatalog::new();
    let scale = catalog.find_by_name("gmajpen").unwrap();
    let notes = scale.notes();

    let mut source = FixedSource::new(vec![2, 1, 0, 1, 2]);
    let riff = shred(scale, 5, &mut source);
    assert_eq!(riff, vec![notes[2], notes[1], notes[0], notes[1], notes[2]]);

    let tab = render(&riff);
    assert_eq!(tab.lines().count(), 6);
    assert!(tab.starts_with("e|-"));
}

/// A seeded generator only ever plays scale notes
#[test]
fn test_seeded_riffs_stay_in_scale() {
    let catalog = ScaleCatalog::new();
    let mut gen = RiffGenerator::seeded(2026);

    for scale in catalog.all_scales() {
        let riff = gen.shred(scale, 32);
        assert_eq!(riff.len(), 32);
        assert!(riff.iter().all(|n| scale.contains(n)));
    }
}

/// The wide-fret alignment example
#[test]
fn test_render_alignment() {
    let notes = [
        Note::new(GuitarString::HighE, 13),
        Note::new(GuitarString::B, 4),
        Note::new(GuitarString::G, 6),
        Note::new(GuitarString::D, 2),
        Note::new(GuitarString::A, 11),
        Note::new(GuitarString::LowE, 0),
    ];

    assert_eq!(
        render(&notes),
        "e|-13-----------------\n\
         B|-----4--------------\n\
         G|--------6-----------\n\
         D|-----------2--------\n\
         A|--------------11----\n\
         E|------------------0-"
    );
    assert_eq!(render(&[]), "e|--\nB|--\nG|--\nD|--\nA|--\nE|--");
}

/// Command line actions, end to end
#[test]
fn test_cli_actions() {
    let catalog = ScaleCatalog::new();
    let mut source = FixedSource::new(vec![0]);

    let tuned = cli::run(
        &Action::Tune {
            scale: "bmajpen".to_string(),
            tuning: "C".to_string(),
        },
        &catalog,
        &mut source,
    )
    .unwrap();
    assert!(tuned.starts_with("Original Scale: B Major Pentatonic\n"));
    assert!(tuned.contains("\n\nTuned Scale: D Major Pentatonic\n"));

    let err = cli::run(
        &Action::Shred {
            scale: "x major pentatonic".to_string(),
            tuning: "A".to_string(),
            length: "4".to_string(),
        },
        &catalog,
        &mut source,
    )
    .unwrap_err();
    assert_eq!(err, ShredError::UnknownScale("x major pentatonic".to_string()));
    assert_eq!(err.exit_code(), 2);
}

/// Config defaults feed the shred action
#[test]
fn test_config_defaults_drive_riff() {
    let config = ShredConfig::from_yaml("defaults:\n  length: 7\n  tuning: \"D\"\n").unwrap();
    config.validate().unwrap();

    let catalog = ScaleCatalog::new();
    let mut source = FixedSource::new(vec![4]);
    let action = Action::Shred {
        scale: "amajpen".to_string(),
        tuning: config.defaults.tuning.clone(),
        length: config.defaults.length.to_string(),
    };

    let tab = cli::run(&action, &catalog, &mut source).unwrap();
    let b_line = tab.lines().nth(1).unwrap();
    // D major pentatonic, fifth note is B string fret 6 + 5
    assert_eq!(b_line.matches("11").count(), 7);
}
