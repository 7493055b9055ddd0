//! Whole-session behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use gpickr::prelude::*;
use gpickr_css::{parse_gradient, Modifier};

fn color(s: &str) -> ColorToken {
    ColorToken::parse(s).unwrap()
}

fn session(stops: &[(&str, f32)]) -> StopEditor {
    StopEditor::new(PickerConfig::new().stops(stops.iter().copied())).unwrap()
}

fn locations(ed: &StopEditor) -> Vec<f32> {
    ed.stops().iter().map(|s| s.location).collect()
}

#[test]
fn serialized_gradient_parses_back() {
    let mut ed = session(&[("red", 0.0), ("hsl(120deg 50% 50% / 0.5)", 0.25), ("#0000ff80", 1.0)]);
    for mode in [Mode::Linear, Mode::Radial, Mode::Conic] {
        ed.set_mode(mode).unwrap();
        let text = ed.gradient();
        let parsed = parse_gradient(&text).unwrap();
        assert_eq!(parsed.mode, mode, "{text}");
        let back: Vec<(String, f32)> = parsed
            .stops
            .iter()
            .map(|s| (s.color.to_string(), s.location))
            .collect();
        let ours: Vec<(String, f32)> = ed.stops().iter().map(|s| (s.color.to_string(), s.location)).collect();
        assert_eq!(back.len(), ours.len());
        for ((bc, bl), (oc, ol)) in back.iter().zip(&ours) {
            assert_eq!(bc, oc);
            assert!((bl - ol).abs() < 1e-4, "{text}: {bl} vs {ol}");
        }
    }
}

#[test]
fn numeric_angle_survives_round_trip() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    for degrees in [0.0, 22.5, 45.0, 137.125, 337.5, 359.5, -22.5, 720.25] {
        ed.set_linear_angle_degrees(degrees).unwrap();
        let text = ed.gradient();
        let expected = degrees.rem_euclid(360.0);
        match parse_gradient(&text).unwrap().modifier {
            Modifier::Angle(LinearAngle::Degrees(got)) => {
                assert!((got - expected).abs() < 1e-3, "{text}: {got} vs {expected}");
            }
            other => panic!("{text}: expected a degree modifier, got {other:?}"),
        }
    }
}

#[test]
fn tiny_negative_angle_wraps_to_zero() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    ed.set_linear_angle_degrees(-1e-6).unwrap();
    assert_eq!(ed.linear_angle(), Some(LinearAngle::Degrees(0.0)));
    assert_eq!(ed.gradient(), "linear-gradient(0deg, red 0%, blue 100%)");
}

#[test]
fn color_channels_are_not_rounded() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    let text = "linear-gradient(90deg, rgba(0,0,0,0.0004) 0%, oklch(0.62795 0.25768 29.234) 100%)";
    ed.set_gradient(text).unwrap();
    assert_eq!(ed.gradient(), text);
}

#[test]
fn imported_gradient_reserializes_identically() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    let text = "linear-gradient(to top right, #fff 0%, rgba(0,0,0,0.5) 40%, black 100%)";
    ed.set_gradient(text).unwrap();
    assert_eq!(ed.gradient(), text);
    ed.set_gradient(&ed.gradient()).unwrap();
    assert_eq!(ed.gradient(), text);
}

#[test]
fn locations_stay_clamped() {
    let mut ed = session(&[("red", -2.0), ("blue", 7.5)]);
    assert_eq!(locations(&ed), vec![0.0, 1.0]);
    let h = ed.add_stop(color("lime"), 1.3);
    assert_eq!(ed.stop(h).unwrap().location(), 1.0);
    ed.relocate_stop(h, -0.1).unwrap();
    assert_eq!(ed.stop(h).unwrap().location(), 0.0);
    assert!(locations(&ed).iter().all(|l| (0.0..=1.0).contains(l)));
}

#[test]
fn equal_locations_keep_insertion_order() {
    let mut ed = session(&[("black", 0.5)]);
    ed.add_stop(color("red"), 0.2);
    ed.add_stop(color("lime"), 0.8);
    ed.add_stop(color("blue"), 0.2);
    let stops = ed.stops();
    let colors: Vec<&str> = stops.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["red", "blue", "black", "lime"]);
    assert_eq!(locations(&ed), vec![0.2, 0.2, 0.5, 0.8]);
}

#[test]
fn set_gradient_is_all_or_nothing() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);
    ed.on_change(move |_, _| *seen.borrow_mut() += 1);

    let before = ed.gradient();
    assert!(ed.set_gradient("linear-gradient(red)").is_err());
    assert!(ed.set_gradient("linear-gradient(45deg, red, notacolor)").is_err());
    assert!(ed.set_gradient("url(x.png)").is_err());
    assert_eq!(ed.gradient(), before);
    assert_eq!(*count.borrow(), 0);

    assert!(ed.set_gradient("conic-gradient(red, yellow, blue)").is_ok());
    assert_eq!(*count.borrow(), 1);
    assert_eq!(ed.mode(), Mode::Conic);
    assert_eq!(ed.gradient(), "conic-gradient(red 0deg, yellow 180deg, blue 360deg)");
}

#[test]
fn gaps_are_filled_on_import() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    ed.set_gradient("linear-gradient(90deg, red, orange, yellow, green 60%, blue)").unwrap();
    let got = locations(&ed);
    let want = [0.0, 0.2, 0.4, 0.6, 1.0];
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < 1e-6, "{got:?}");
    }
}

#[test]
fn drag_removal_needs_three_stops() {
    let mut ed = session(&[("red", 0.0), ("lime", 0.5), ("blue", 1.0)]);
    let middle = ed.model().stops()[1].handle();
    let mut drag = ed.begin_drag(middle).unwrap();
    ed.drag_to(&mut drag, 0.5, DRAG_REMOVE_DISTANCE + 1.0).unwrap();
    assert_eq!(ed.end_drag(drag).unwrap(), DragOutcome::Removed);
    assert_eq!(ed.gradient(), "linear-gradient(0deg, red 0%, blue 100%)");

    let last = ed.model().stops()[1].handle();
    let mut drag = ed.begin_drag(last).unwrap();
    ed.drag_to(&mut drag, 0.8, DRAG_REMOVE_DISTANCE + 100.0).unwrap();
    assert_eq!(ed.end_drag(drag).unwrap(), DragOutcome::Relocated);
    assert_eq!(ed.gradient(), "linear-gradient(0deg, red 0%, blue 80%)");
}

#[test]
fn pointer_snapping() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    assert_eq!(ed.set_angle_from_pointer(1.0, -0.5, SnapDivisor::One).unwrap(), 45.0);
    assert_eq!(ed.set_angle_from_pointer(1.0, -0.5, SnapDivisor::from_modifiers(true, false)).unwrap(), 45.0);
    assert_eq!(ed.set_angle_from_pointer(1.0, -0.5, SnapDivisor::Four).unwrap(), 56.25);
    assert_eq!(ed.set_angle_from_pointer(1.0, 0.0, SnapDivisor::One).unwrap(), 90.0);
    assert_eq!(ed.set_angle_from_pointer(0.0, -1.0, SnapDivisor::One).unwrap(), 0.0);
    assert_eq!(ed.gradient(), "linear-gradient(0deg, red 0%, blue 100%)");
}

#[test]
fn mode_switch_keeps_other_settings() {
    let mut ed = session(&[("red", 0.0), ("blue", 1.0)]);
    ed.set_linear_angle_str("to left").unwrap();
    ed.set_mode(Mode::Radial).unwrap();
    ed.set_radial_position(RadialPosition::TopRight);
    ed.set_mode(Mode::Linear).unwrap();
    assert_eq!(ed.gradient(), "linear-gradient(to left, red 0%, blue 100%)");
    assert_eq!(
        ed.gradient_for(Mode::Radial),
        "radial-gradient(circle at top right, red 0%, blue 100%)"
    );
}

#[test]
fn stops_serialize_to_json() {
    let ed = session(&[("red", 0.0), ("#abc", 0.5)]);
    let json = serde_json::to_value(ed.stops()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "color": "red", "location": 0.0 },
            { "color": "#abc", "location": 0.5 },
        ])
    );
}
