/// Generation and content-pack integration tests.

use headline_engine::core::content::{ContentError, ContentSet};
use headline_engine::core::generator::HeadlineGenerator;
use headline_engine::schema::headline::SubjectKind;
use std::path::Path;

#[test]
fn fixture_pack_loads_and_validates() {
    let path = Path::new("tests/fixtures/test_content.ron");
    let content = ContentSet::load_from_ron(path).unwrap();
    content.validate().unwrap();
    assert_eq!(content.celebrities.len(), 2);
    assert_eq!(content.fictional.len(), 1);
    assert_eq!(content.concepts.len(), 3);
    assert_eq!(content.templates.len(), 2);
}

#[test]
fn singleton_fixture_is_fully_determined() {
    let content =
        ContentSet::load_from_ron(Path::new("tests/fixtures/singleton.ron")).unwrap();
    let mut generator = HeadlineGenerator::builder()
        .content(content)
        .build()
        .unwrap();

    for _ in 0..25 {
        assert_eq!(
            generator.generate().text,
            "🚨 SATIRICAL NEWS: Shahrukh Khan launches startup for Taj Mahal!"
        );
    }
}

#[test]
fn every_headline_is_a_complete_interpolation() {
    let mut generator = HeadlineGenerator::builder()
        .content_pack("tests/fixtures/test_content.ron")
        .seed(17)
        .build()
        .unwrap();

    for _ in 0..300 {
        let h = generator.generate();

        // The subject comes from exactly the category it claims.
        assert!(generator.content().subject_pool(h.kind).contains(&h.subject));
        assert!(generator.content().actions.contains(&h.action));
        assert!(generator.content().places.contains(&h.place));

        // All three slots are filled and no slot marker survives.
        assert!(h.text.contains(&h.subject));
        assert!(h.text.contains(&h.action));
        assert!(h.text.contains(&h.place));
        assert!(!h.text.contains("{}"));
    }
}

#[test]
fn subject_comes_from_union_of_pools() {
    let mut generator = HeadlineGenerator::builder().seed(23).build().unwrap();
    for _ in 0..100 {
        let h = generator.generate();
        let content = generator.content();
        let in_union = content.celebrities.contains(&h.subject)
            || content.fictional.contains(&h.subject)
            || content.concepts.contains(&h.subject);
        assert!(in_union, "subject {:?} not found in any pool", h.subject);
    }
}

#[test]
fn counter_and_history_track_generation_count() {
    let mut generator = HeadlineGenerator::builder().seed(1).build().unwrap();

    let mut produced = Vec::new();
    for n in 1..=12u64 {
        produced.push(generator.generate().text);
        assert_eq!(generator.count(), n);
        assert_eq!(generator.history().len(), n as usize);
    }

    // History preserves call order.
    let recorded: Vec<_> = generator
        .history()
        .entries()
        .iter()
        .map(|e| e.text.clone())
        .collect();
    assert_eq!(recorded, produced);

    // Timestamps never go backwards.
    let entries = generator.history().entries();
    for pair in entries.windows(2) {
        assert!(pair[0].at <= pair[1].at);
    }
}

#[test]
fn clear_history_is_total_and_leaves_counter() {
    let mut generator = HeadlineGenerator::builder().seed(2).build().unwrap();
    for _ in 0..7 {
        generator.generate();
    }

    generator.clear_history();
    assert_eq!(generator.history().len(), 0);
    assert_eq!(generator.count(), 7);

    // Generation keeps working after a clear.
    generator.generate();
    assert_eq!(generator.history().len(), 1);
    assert_eq!(generator.count(), 8);
}

#[test]
fn category_weighting_is_per_pool_not_per_item() {
    // One-entry fictional pool vs. many-entry concept pool: the single
    // fictional character should appear in roughly a third of draws,
    // far above its union share.
    let mut generator = HeadlineGenerator::builder()
        .content(
            ContentSet::load_from_ron(Path::new("tests/fixtures/test_content.ron")).unwrap(),
        )
        .seed(99)
        .build()
        .unwrap();

    let total = 600;
    let mut fictional_draws = 0;
    for _ in 0..total {
        if generator.generate().kind == SubjectKind::Fictional {
            fictional_draws += 1;
        }
    }

    let share = fictional_draws as f64 / total as f64;
    assert!(
        (0.25..0.42).contains(&share),
        "expected ~1/3 fictional draws, got {share}"
    );
}

#[test]
fn merged_pack_entries_are_drawn() {
    let mut generator = HeadlineGenerator::builder()
        .content_pack("content/tech_gully.ron")
        .seed(7)
        .build()
        .unwrap();

    let pack_places = ["Koramangala Cafe", "HITEC City Hyderabad"];
    let mut saw_pack_entry = false;
    for _ in 0..500 {
        let h = generator.generate();
        if pack_places.contains(&h.place.as_str()) {
            saw_pack_entry = true;
            break;
        }
    }
    assert!(saw_pack_entry, "merged pack entries never selected");
}

#[test]
fn missing_pack_file_errors() {
    let result = HeadlineGenerator::builder()
        .content_pack("tests/fixtures/no_such_pack.ron")
        .build();
    assert!(matches!(result, Err(ContentError::Io(_))));
}

#[test]
fn incomplete_standalone_pack_fails_validation() {
    let content = ContentSet::parse_ron(r#"(actions: ["waves at"])"#).unwrap();
    let result = HeadlineGenerator::builder().content(content).build();
    assert!(matches!(result, Err(ContentError::EmptyPool(_))));
}
