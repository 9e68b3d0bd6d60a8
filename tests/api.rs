use docfile::{Dataset, Error, JsonStorage, Record, Storage};
use serde_json::json;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("docfile_test_{}.json", name))
}

fn sample_dataset() -> Dataset {
    let mut key1 = Record::new();
    key1.insert("subkey1".into(), json!("value1"));
    key1.insert("subkey2".into(), json!("value2"));

    let mut key2 = Record::new();
    key2.insert("subkey1".into(), json!(123));
    key2.insert("subkey2".into(), json!(456));

    let mut data = Dataset::new();
    data.insert("key1".into(), key1);
    data.insert("key2".into(), key2);
    data
}

// ---- round-trip -------------------------------------------------------------

#[test]
fn write_then_read_round_trips() {
    let path = temp_path("roundtrip");
    let _ = std::fs::remove_file(&path);

    let mut db = JsonStorage::open(&path).unwrap();
    let data = sample_dataset();
    db.write(&data).unwrap();

    let back = db.read().unwrap().expect("dataset was just written");
    assert_eq!(back, data);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn scenario_values_survive_the_trip() {
    let path = temp_path("scenario");
    let _ = std::fs::remove_file(&path);

    let mut db = JsonStorage::open(&path).unwrap();
    db.write(&sample_dataset()).unwrap();

    let back = db.read().unwrap().unwrap();
    assert_eq!(back["key1"]["subkey1"], json!("value1"));
    assert_eq!(back["key1"]["subkey2"], json!("value2"));
    assert_eq!(back["key2"]["subkey1"], json!(123));
    assert_eq!(back["key2"]["subkey2"], json!(456));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn mixed_value_types_round_trip() {
    let path = temp_path("mixed_types");
    let _ = std::fs::remove_file(&path);

    let mut rec = Record::new();
    rec.insert("s".into(), json!("text"));
    rec.insert("n".into(), json!(1.5));
    rec.insert("b".into(), json!(true));
    rec.insert("null".into(), json!(null));
    rec.insert("arr".into(), json!([1, 2, 3]));
    rec.insert("obj".into(), json!({"nested": {"deep": "yes"}}));
    let mut data = Dataset::new();
    data.insert("doc".into(), rec);

    let mut db = JsonStorage::open(&path).unwrap();
    db.write(&data).unwrap();
    assert_eq!(db.read().unwrap().unwrap(), data);
    let _ = std::fs::remove_file(&path);
}

// ---- repeated writes --------------------------------------------------------

#[test]
fn growing_rewrite_reads_latest() {
    let path = temp_path("grow");
    let _ = std::fs::remove_file(&path);

    let mut db = JsonStorage::open(&path).unwrap();
    let mut data = sample_dataset();
    db.write(&data).unwrap();

    // strictly larger serialization, so the old content is fully covered
    let mut key3 = Record::new();
    key3.insert("subkey1".into(), json!("third"));
    data.insert("key3".into(), key3);
    db.write(&data).unwrap();

    assert_eq!(db.read().unwrap().unwrap(), data);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn shrinking_write_leaves_stale_bytes() {
    let path = temp_path("shrink");
    let _ = std::fs::remove_file(&path);

    let mut db = JsonStorage::open(&path).unwrap();
    db.write(&sample_dataset()).unwrap();

    // a much smaller dataset does not truncate the file, so the tail of
    // the previous serialization survives and the document no longer parses
    let mut small = Dataset::new();
    small.insert("k".into(), Record::new());
    db.write(&small).unwrap();

    match db.read() {
        Err(Error::Parse(_)) => {}
        other => panic!("expected parse failure from stale tail, got {other:?}"),
    }
    let _ = std::fs::remove_file(&path);
}

// ---- on-disk format ---------------------------------------------------------

#[test]
fn writes_pretty_json_with_four_space_indent() {
    let path = temp_path("pretty");
    let _ = std::fs::remove_file(&path);

    let mut db = JsonStorage::open(&path).unwrap();
    db.write(&sample_dataset()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'));
    assert!(raw.contains("    \"subkey1\""));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn accepts_compact_json_on_read() {
    let path = temp_path("compact_in");
    let _ = std::fs::remove_file(&path);
    std::fs::write(&path, r#"{"k":{"s":1}}"#).unwrap();

    let mut db = JsonStorage::open(&path).unwrap();
    let back = db.read().unwrap().unwrap();
    assert_eq!(back["k"]["s"], json!(1));
    let _ = std::fs::remove_file(&path);
}

// ---- handle reuse across instances ------------------------------------------

#[test]
fn fresh_handle_sees_previous_writes() {
    let path = temp_path("reopen");
    let _ = std::fs::remove_file(&path);

    let data = sample_dataset();
    {
        let mut db = JsonStorage::open(&path).unwrap();
        db.write(&data).unwrap();
        db.close();
    }
    let mut db = JsonStorage::open(&path).unwrap();
    assert_eq!(db.read().unwrap().unwrap(), data);
    let _ = std::fs::remove_file(&path);
}

// ---- malformed content ------------------------------------------------------

#[test]
fn garbage_file_fails_with_parse_error() {
    let path = temp_path("garbage");
    let _ = std::fs::remove_file(&path);
    std::fs::write(&path, "not json at all").unwrap();

    let mut db = JsonStorage::open(&path).unwrap();
    match db.read() {
        Err(Error::Parse(_)) => {}
        other => panic!("expected Error::Parse, got {other:?}"),
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn wrong_shape_fails_with_parse_error() {
    let path = temp_path("wrong_shape");
    let _ = std::fs::remove_file(&path);
    // valid JSON, but values are not sub-key maps
    std::fs::write(&path, r#"{"key1": "just a string"}"#).unwrap();

    let mut db = JsonStorage::open(&path).unwrap();
    match db.read() {
        Err(Error::Parse(_)) => {}
        other => panic!("expected Error::Parse, got {other:?}"),
    }
    let _ = std::fs::remove_file(&path);
}

// ---- debug ------------------------------------------------------------------

#[test]
fn debug_impl_does_not_panic() {
    let path = temp_path("debug");
    let _ = std::fs::remove_file(&path);

    let db = JsonStorage::open(&path).unwrap();
    let dbg = format!("{db:?}");
    assert!(dbg.contains("JsonStorage"));
    assert!(dbg.contains("path"));
    let _ = std::fs::remove_file(&path);
}
