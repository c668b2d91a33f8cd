//! Gateway behaviour against the scripted session and the in-memory drawing.

use cadprompt::document::{EntityStore, InMemoryDocument};
use cadprompt::entity::{EntityClass, EntityHandle};
use cadprompt::geometry::Point3d;
use cadprompt::prompt::{PromptGateway, PromptStatus, ScriptedSession};
use serde_json::json;
use test_log::test;

fn drawing() -> InMemoryDocument {
    let document = InMemoryDocument::new();
    document.add_entity(EntityClass::Line, "0", 256).unwrap();
    document.add_entity(EntityClass::Arc, "0", 256).unwrap();
    document.add_entity(EntityClass::Text, "0", 256).unwrap();
    document
}

/// One-answer session; the answer must be consumed by exactly one prompt.
fn answering(status: PromptStatus) -> ScriptedSession {
    ScriptedSession::new().with_status(status)
}

fn assert_consumed(session: &ScriptedSession) {
    assert_eq!(session.remaining(), 0);
    assert_eq!(session.prompts().len(), 1);
}

#[test]
fn cancel_and_error_return_each_getters_sentinel() {
    let document = drawing();
    for status in [PromptStatus::Cancel, PromptStatus::Error] {
        let session = answering(status);
        assert!(PromptGateway::new(&session, &document).get_angle("Angle").is_nan());
        assert_consumed(&session);

        let session = answering(status);
        assert!(PromptGateway::new(&session, &document).get_distance("Distance").is_nan());
        assert_consumed(&session);

        let session = answering(status);
        assert_eq!(PromptGateway::new(&session, &document).get_integer("Count"), 0);
        assert_consumed(&session);

        let session = answering(status);
        assert_eq!(PromptGateway::new(&session, &document).get_point("Point", false), Point3d::ORIGIN);
        assert_consumed(&session);

        let session = answering(status);
        let corner = PromptGateway::new(&session, &document).get_corner("Corner", Point3d::ORIGIN);
        assert_eq!(corner, Point3d::NULL);
        assert_consumed(&session);

        let session = answering(status);
        assert_eq!(PromptGateway::new(&session, &document).get_string("Name", Some("foo"), false), None);
        assert_consumed(&session);

        let session = answering(status);
        let keyword = PromptGateway::new(&session, &document).get_keywords("Mode", &["A", "B"], 1, false);
        assert_eq!(keyword, None);
        assert_consumed(&session);

        let session = answering(status);
        assert_eq!(PromptGateway::new(&session, &document).get_entity_id("Pick"), EntityHandle::NULL);
        assert_consumed(&session);

        let session = answering(status);
        assert!(PromptGateway::new(&session, &document).get_entity("Pick").is_none());
        assert_consumed(&session);

        let session = answering(status);
        let typed = PromptGateway::new(&session, &document).get_entity_id_of_type(
            "Pick",
            EntityClass::Line,
            true,
        );
        assert_eq!(typed, EntityHandle::NULL);
        assert_consumed(&session);
    }
}

#[test]
fn empty_answer_returns_sentinel_where_none_is_allowed() {
    let document = drawing();

    let session = answering(PromptStatus::None);
    assert_eq!(PromptGateway::new(&session, &document).get_point("Point", true), Point3d::ORIGIN);
    assert_consumed(&session);

    let session = answering(PromptStatus::None);
    let corner = PromptGateway::new(&session, &document).get_corner("Corner", Point3d::ORIGIN);
    assert_eq!(corner, Point3d::NULL);
    assert_consumed(&session);

    let session = answering(PromptStatus::None);
    assert_eq!(PromptGateway::new(&session, &document).get_string("Name", Some("foo"), true), None);
    assert_consumed(&session);

    let session = answering(PromptStatus::None);
    let keyword = PromptGateway::new(&session, &document).get_keywords("Mode", &["A", "B"], 0, true);
    assert_eq!(keyword, None);
    assert_consumed(&session);
}

#[test]
fn empty_answer_is_asked_again_where_a_value_is_required() {
    let document = drawing();
    let session = ScriptedSession::new().with_status(PromptStatus::None).with_ok(0.5);

    assert_eq!(PromptGateway::new(&session, &document).get_angle("Angle"), 0.5);
    assert_eq!(session.remaining(), 0);
    assert_eq!(session.prompts().len(), 1);
}

#[test]
fn point_sentinel_and_corner_sentinel_differ() {
    let document = drawing();
    let session = ScriptedSession::new()
        .with_status(PromptStatus::Cancel)
        .with_status(PromptStatus::Cancel);
    let gateway = PromptGateway::new(&session, &document);

    let point = gateway.get_point("Point", false);
    let corner = gateway.get_corner("Corner", Point3d::ORIGIN);

    assert_eq!(point, Point3d::ORIGIN);
    assert_eq!(corner, Point3d::NULL);
    assert_ne!(point, corner);
}

#[test]
fn keyword_list_answers_and_cancels() {
    let document = drawing();
    let session = ScriptedSession::new().with_ok("B").with_status(PromptStatus::Cancel);
    let gateway = PromptGateway::new(&session, &document);

    assert_eq!(gateway.get_keywords("Mode", &["A", "B", "C"], 1, false), Some("B".to_string()));
    assert_eq!(gateway.get_keywords("Mode", &["A", "B", "C"], 1, false), None);
}

#[test]
fn keyword_spec_resolves_display_names_to_globals() {
    let document = drawing();
    let session = ScriptedSession::new().with_ok("nein");
    let gateway = PromptGateway::new(&session, &document);

    let answer = gateway.get_keywords_from_spec("Continue [Ja/Nein] <Ja>: ", "Yes No", false);
    assert_eq!(answer, Some("No".to_string()));
}

#[test]
fn string_default_round_trip() {
    let document = drawing();
    let session = ScriptedSession::new().with_ok(json!(null)).with_status(PromptStatus::Cancel);
    let gateway = PromptGateway::new(&session, &document);

    assert_eq!(gateway.get_string("Name", Some("foo"), false), Some("foo".to_string()));
    assert_eq!(gateway.get_string("Name", Some("foo"), false), None);
}

#[test]
fn typed_entity_skips_rejected_picks() {
    let document = drawing();
    let session = ScriptedSession::new()
        .with_entity(EntityHandle(3), EntityClass::Text)
        .with_entity(EntityHandle(2), EntityClass::Arc)
        .with_entity(EntityHandle(1), EntityClass::Line);
    let gateway = PromptGateway::new(&session, &document);

    assert_eq!(gateway.get_entity_id_of_type("Pick a line", EntityClass::Line, true), EntityHandle(1));
    assert_eq!(session.remaining(), 0);
}

#[test]
fn kind_of_match_accepts_subclasses() {
    let document = drawing();
    let session = ScriptedSession::new().with_entity(EntityHandle(2), EntityClass::Arc);
    let gateway = PromptGateway::new(&session, &document);

    assert_eq!(gateway.get_entity_id_of_type("Pick a curve", EntityClass::Curve, false), EntityHandle(2));
}

#[test]
fn get_entity_opens_the_record() {
    let document = drawing();
    let session = ScriptedSession::new().with_ok(2);
    let gateway = PromptGateway::new(&session, &document);

    let record = gateway.get_entity("Pick").unwrap();
    assert_eq!(record.handle, EntityHandle(2));
    assert_eq!(record.class, EntityClass::Arc);
}

#[test]
fn highlight_skips_unresolvable_handles() {
    let document = drawing();
    document.erase(EntityHandle(2));
    let session = ScriptedSession::new();
    let gateway = PromptGateway::new(&session, &document);
    let handles = [EntityHandle(1), EntityHandle(2), EntityHandle(3)];

    assert_eq!(gateway.highlight_objects(handles), 2);
    assert!(document.open_for_read(EntityHandle(1)).unwrap().highlighted);
    assert!(document.open_for_read(EntityHandle(3)).unwrap().highlighted);

    assert_eq!(gateway.unhighlight_objects(handles), 2);
    assert!(!document.open_for_read(EntityHandle(3)).unwrap().highlighted);
}

#[test]
fn pick_set_is_replaced_and_cleared() {
    let document = drawing();
    let session = ScriptedSession::new();
    let gateway = PromptGateway::new(&session, &document);

    gateway.set_pick_set(&[EntityHandle(1), EntityHandle(3)]);
    assert_eq!(session.implied_selection(), vec![EntityHandle(1), EntityHandle(3)]);

    gateway.set_pick_set(&[]);
    gateway.set_pick_set(&[]);
    assert!(session.implied_selection().is_empty());
}

#[test]
fn exhausted_script_reads_as_no_answer() {
    let document = drawing();
    let session = ScriptedSession::new();
    let gateway = PromptGateway::new(&session, &document);

    assert_eq!(gateway.get_integer("Count"), 0);
    assert_eq!(session.prompts().len(), 1);
}
