//! High-score file behaviour, alone and wired into an engine.

use std::fs;

use tetris3d::core::{Engine, NoSound, Persistence, ScriptedSource};
use tetris3d::persist::FileStore;
use tetris3d::types::Dimensions;

const SQUARE: u32 = 1;

fn engine_with(store: FileStore) -> Engine {
    Engine::with_ports(
        Box::new(ScriptedSource::new(vec![SQUARE])),
        Box::new(NoSound::default()),
        Box::new(store),
    )
}

#[test]
fn test_missing_file_loads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().join("high.json"));
    assert_eq!(store.load(), 0);
    assert!(!store.path().exists());
}

#[test]
fn test_corrupt_file_loads_zero_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high.json");
    fs::write(&path, "not a number").unwrap();

    let mut store = FileStore::new(&path);
    assert!(store.read().is_err());
    assert_eq!(store.load(), 0);

    store.save(300);
    assert_eq!(store.load(), 300);
}

#[test]
fn test_negative_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high.json");
    fs::write(&path, "-5").unwrap();
    assert_eq!(FileStore::new(&path).load(), 0);
}

#[test]
fn test_save_then_load_survives_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores/high.json");

    FileStore::new(&path).save(1200);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1200");
    assert_eq!(FileStore::new(&path).load(), 1200);
}

#[test]
fn test_whitespace_around_value_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high.json");
    fs::write(&path, " 450\n").unwrap();
    assert_eq!(FileStore::new(&path).read().unwrap(), Some(450));
}

#[test]
fn test_engine_saves_a_beaten_high_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high.json");
    fs::write(&path, "50").unwrap();

    let mut engine = engine_with(FileStore::new(&path));
    assert_eq!(engine.high_score(), 50);
    engine.start(Dimensions::CLASSIC);

    for z in 0..10 {
        for x in 0..10 {
            engine.board_mut().set(x, 0, z, Some(1));
        }
    }
    engine.hard_drop();

    assert_eq!(engine.score(), 100);
    assert_eq!(engine.high_score(), 100);
    assert_eq!(FileStore::new(&path).load(), 100);

    // a fresh engine picks it up
    let again = engine_with(FileStore::new(&path));
    assert_eq!(again.high_score(), 100);
}

#[test]
fn test_engine_leaves_file_alone_when_not_beaten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("high.json");
    fs::write(&path, "5000").unwrap();

    let mut engine = engine_with(FileStore::new(&path));
    engine.start(Dimensions::CLASSIC);
    for z in 0..10 {
        for x in 0..10 {
            engine.board_mut().set(x, 0, z, Some(1));
        }
    }
    engine.hard_drop();

    assert_eq!(engine.score(), 100);
    assert_eq!(engine.high_score(), 5000);
    assert_eq!(fs::read_to_string(&path).unwrap(), "5000");
}
