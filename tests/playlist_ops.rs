use playlist_engine::model::{Track, TrackId};
use playlist_engine::report;
use playlist_engine::{cli, EngineError, PlaylistEngine};
use std::fs;
use std::io::BufReader;
use tempfile::TempDir;

fn seeded(titles: &[(&str, &str, u32)]) -> PlaylistEngine {
    let mut engine = PlaylistEngine::new();
    for (title, genre, duration) in titles {
        engine
            .add_track(title, "Artist", genre, *duration)
            .expect("unique seed titles");
    }
    engine
}

fn titles(engine: &PlaylistEngine) -> Vec<String> {
    engine.snapshot().into_iter().map(|t| t.title).collect()
}

/// Every track in the snapshot must resolve through both indices, and both
/// indices must be exactly as large as the snapshot.
fn assert_index_complete(engine: &PlaylistEngine) {
    let snapshot = engine.snapshot();
    assert_eq!(engine.len(), snapshot.len());
    for track in &snapshot {
        let by_id = engine.lookup_by_id(track.id).expect("id index hit");
        let by_title = engine.lookup_by_title(&track.title).expect("title index hit");
        assert_eq!(by_id, track);
        assert_eq!(by_title, track);
    }
}

#[test]
fn index_completeness_survives_a_mutation_sequence() {
    let mut engine = seeded(&[("A", "Pop", 100), ("B", "Rock", 200), ("C", "Pop", 300)]);
    assert_index_complete(&engine);

    assert!(engine.delete_at(1).is_some());
    assert_index_complete(&engine);

    engine.add_track("D", "Artist", "Jazz", 150).unwrap();
    assert_index_complete(&engine);

    assert!(engine.move_track(0, 2));
    assert_index_complete(&engine);

    engine.reverse();
    assert_index_complete(&engine);

    while engine.delete_at(0).is_some() {
        assert_index_complete(&engine);
    }
    assert!(engine.is_empty());
}

#[test]
fn reverse_twice_restores_order() {
    let mut engine = seeded(&[("A", "Pop", 1), ("B", "Pop", 2), ("C", "Pop", 3)]);

    engine.reverse();
    engine.reverse();
    assert_eq!(titles(&engine), ["A", "B", "C"]);
    assert_index_complete(&engine);
}

#[test]
fn move_forward_counts_positions_after_removal() {
    let mut engine = seeded(&[("A", "Pop", 1), ("B", "Pop", 2), ("C", "Pop", 3)]);

    assert!(engine.move_track(0, 2));
    assert_eq!(titles(&engine), ["B", "C", "A"]);
}

#[test]
fn move_backward_lands_before_destination() {
    let mut engine = seeded(&[("A", "Pop", 1), ("B", "Pop", 2), ("C", "Pop", 3)]);

    assert!(engine.move_track(2, 0));
    assert_eq!(titles(&engine), ["C", "A", "B"]);
}

#[test]
fn duration_sort_is_stable_for_ties() {
    let engine = seeded(&[
        ("A", "Pop", 200),
        ("B", "Pop", 100),
        ("C", "Pop", 200),
        ("D", "Pop", 100),
    ]);
    let snapshot = engine.snapshot();

    let asc: Vec<String> = report::sort_by_duration(&snapshot, true)
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(asc, ["B", "D", "A", "C"]);

    let desc: Vec<String> = report::sort_by_duration(&snapshot, false)
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(desc, ["A", "C", "B", "D"]);
}

#[test]
fn top_n_boundaries() {
    let engine = seeded(&[("A", "Pop", 100), ("B", "Pop", 300), ("C", "Pop", 200)]);

    assert!(engine.top_longest(0).is_empty());

    let all = engine.top_longest(1000);
    let names: Vec<String> = all.into_iter().map(|t| t.title).collect();
    assert_eq!(names, ["B", "C", "A"]);
}

#[test]
fn genre_dominance_flags_eighty_percent() {
    let mut engine = PlaylistEngine::new();
    for i in 0..8 {
        engine.add_track(&format!("P{i}"), "Artist", "Pop", 100).unwrap();
    }
    for i in 0..2 {
        engine.add_track(&format!("R{i}"), "Artist", "Rock", 100).unwrap();
    }

    let report = engine.genre_report();
    assert_eq!(report.counts["Pop"], 8);
    assert_eq!(report.counts["Rock"], 2);
    assert_eq!(report.dominant, ["Pop"]);
}

#[test]
fn undo_round_trip_restores_fields_with_a_new_id() {
    let mut engine = seeded(&[("X", "Pop", 100)]);
    let original = engine.play("X").unwrap();
    engine.delete_at(0).unwrap();

    let restored = engine.undo_last_play().unwrap().unwrap();
    assert_eq!(
        (restored.title.as_str(), restored.artist.as_str(), restored.genre.as_str()),
        ("X", "Artist", "Pop")
    );
    assert_eq!(restored.duration_secs, 100);
    assert_ne!(restored.id, original.id);
    assert_eq!(restored.id, TrackId(2));
}

#[test]
fn out_of_range_deletes_change_nothing() {
    let mut engine = seeded(&[("A", "Pop", 1), ("B", "Pop", 2), ("C", "Pop", 3)]);
    let before: Vec<Track> = engine.snapshot();

    assert!(engine.delete_at(3).is_none());
    assert!(engine.delete_at(usize::MAX).is_none());

    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.len(), 3);
    assert_index_complete(&engine);
}

#[test]
fn duplicate_title_rejection_is_typed() {
    let mut engine = seeded(&[("A", "Pop", 1)]);

    let err = engine.add_track("A", "Other", "Rock", 2).unwrap_err();
    assert_eq!(err, EngineError::DuplicateTitle("A".to_string()));
    assert_eq!(engine.len(), 1);
}

#[test]
fn menu_loop_runs_a_script_file() {
    let dir = TempDir::new().expect("temp dir");
    let script_path = dir.path().join("session.txt");
    fs::write(
        &script_path,
        "1\nLong One\nAnna\nPop\n400\n\
         1\nShort One\nBen\nRock\n90\n\
         13\nLong One\n\
         9\nShort One\n5\n\
         10\n\
         6\n\
         8\n\
         14\n",
    )
    .expect("write script");

    let file = fs::File::open(&script_path).expect("open script");
    let mut reader = BufReader::new(file);
    let mut output = Vec::new();
    let mut engine = PlaylistEngine::new();

    cli::run(&mut reader, &mut output, &mut engine).expect("script session");
    let output = String::from_utf8(output).expect("utf-8 output");

    assert!(output.contains("Now playing: Long One by Anna"));
    assert!(output.contains("Rating: 5"));
    assert!(output.contains(" - Short One by Ben"));
    assert!(output.contains("Long One by Anna (400s)"));
    assert!(output.contains("Pop : 1 track(s)"));
    assert!(output.contains("Exiting playlist engine."));
    assert_eq!(engine.len(), 2);
}
