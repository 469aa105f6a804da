use std::io::Cursor;

use ottawa_cli::prompt::run;
use ottawa_cli::render::render_summary;
use ottawa_core::{ProtocolKind, ReferenceContent};

fn assess(script: &str) -> (ottawa_rules::ResultSummary, String) {
    let content = ReferenceContent::default();
    let mut input = Cursor::new(format!("y\n{script}").into_bytes());
    let mut output = Vec::new();
    let summary = run(&content, &mut input, &mut output).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn four_steps_and_no_pain_is_low_risk() {
    let (summary, transcript) = assess("\n\n\n\nn\nn\nn\nn\n");

    assert!(!summary.result.requires_x_ray);
    assert_eq!(summary.protocol.kind, ProtocolKind::Recovery);
    assert!(transcript.contains("3 / 4 steps"));
    assert!(transcript.contains("Press on the Navicular (Medial Foot)"));
}

#[test]
fn cannot_walk_skips_palpation() {
    let (summary, transcript) = assess("\nx\n");

    assert!(summary.result.requires_x_ray);
    assert_eq!(summary.breakdown.len(), 1);
    assert!(!transcript.contains("Press on the"));
}

#[test]
fn invalid_answers_are_asked_again() {
    let (summary, transcript) = assess("\n\n\n\nmaybe\nn\ny\nn\nn\n");

    assert_eq!(summary.result.pain_zone_count, 1);
    assert!(transcript.contains("Please answer y or n."));
}

#[test]
fn restart_discards_earlier_answers() {
    let (summary, _) = assess("\n\n\n\ny\nr\n\n\n\n\nn\nn\nn\nn\n");

    assert_eq!(summary.result.pain_zone_count, 0);
    assert!(!summary.result.requires_x_ray);
}

#[test]
fn closed_input_is_an_error() {
    let content = ReferenceContent::default();
    let mut input = Cursor::new(b"y\n\n\n".to_vec());
    let mut output = Vec::new();
    assert!(run(&content, &mut input, &mut output).is_err());
}

#[test]
fn rendered_summary_lists_badges_and_protocol() {
    let (summary, _) = assess("\n\n\n\nn\ny\nn\nn\n");
    let text = render_summary(&summary);

    assert!(text.contains("== X-Ray Recommended =="));
    assert!(text.contains("[PAIN ] Posterior Edge (Tibia) (Medial Malleolus (6cm))"));
    assert!(text.contains("[PASS ] Weight Bearing"));
    assert!(text.contains("First Aid (While waiting)"));
    assert!(text.contains("not a medical diagnosis"));
}

#[test]
fn disclaimer_is_confirmed_before_the_step_test() {
    let (_, transcript) = assess("\n\n\n\nn\nn\nn\nn\n");

    let disclaimer = transcript.find("not a medical diagnosis").unwrap();
    let step_test = transcript.find("Step Test").unwrap();
    assert!(disclaimer < step_test);
    assert!(transcript.contains("Type 'y' if you understand"));
}

#[test]
fn declining_the_disclaimer_stops_the_assessment() {
    let content = ReferenceContent::default();
    let mut input = Cursor::new(b"maybe\nn\n\n\n\n\n".to_vec());
    let mut output = Vec::new();

    let err = run(&content, &mut input, &mut output).unwrap_err();
    assert!(err.to_string().contains("disclaimer was not accepted"));
    assert!(!String::from_utf8(output).unwrap().contains("Step Test"));
}
