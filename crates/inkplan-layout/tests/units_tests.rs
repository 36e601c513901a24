use inkplan_layout::*;

#[test]
fn test_one_inch_of_millimeters_is_density() {
    for (_, device) in DEVICE_PROFILES.iter() {
        let units = mm_to_units(25.4, device.pixels_per_inch).unwrap();
        assert!((units - device.pixels_per_inch).abs() < 1e-9);
    }
}

#[test]
fn test_millimeter_round_trip() {
    for mm in [0.3, 1.0, 5.0, 7.25, 210.0] {
        let units = mm_to_units(mm, 226.0).unwrap();
        let back = units_to_mm(units, 226.0).unwrap();
        assert!((back - mm).abs() < 1e-9);
    }
}

#[test]
fn test_points_and_fonts() {
    let palma = device_profile("palma").unwrap();
    let scale = palma.units().unwrap();
    assert!((scale.pt(72.0) - 300.0).abs() < 1e-9);
    // Font scaling happens in points, before conversion
    let expected = pt_to_units(10.0 * 0.75, 300.0).unwrap();
    assert!((scale.font(10.0) - expected).abs() < 1e-9);
    assert!((font_pt_to_units(10.0, 300.0, 0.75).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_invalid_density() {
    match mm_to_units(10.0, 0.0) {
        Err(LayoutError::Validation(msg)) => {
            assert_eq!(msg, "device pixels_per_inch must be positive.")
        }
        _ => panic!("Expected Validation error"),
    }
    let mut device = *device_profile("remarkable").unwrap();
    device.pixels_per_inch = -1.0;
    assert!(device.units().is_err());
}

#[test]
fn test_fixed_point_scale() {
    assert!((mm_to_points(25.4) - 72.0).abs() < 1e-9);
}
