use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CurveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CurveError::keyframe("x")
            .to_string()
            .contains("keyframe error:")
    );
    assert!(
        CurveError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        CurveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CurveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
