//! Persistence through the snapshot repository

use tacticq::{
    Engine, EngineConfig,
    adapters::MsgPackRepository,
};

#[test]
fn save_then_load_restores_table_and_stats() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("brain.msgpack");
    let repository = MsgPackRepository;

    let mut trained = Engine::new(EngineConfig::new().with_seed(3).with_model_path(&path));
    trained.train(100).unwrap();
    trained.save(&repository).unwrap();

    let mut fresh = Engine::new(EngineConfig::new().with_model_path(&path));
    assert!(fresh.load(&repository).unwrap());

    assert_eq!(fresh.q_table(), trained.q_table());
    assert_eq!(fresh.stats(), trained.stats());
    assert_eq!(fresh.report(), trained.report());
}

#[test]
fn loading_a_missing_snapshot_leaves_the_engine_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.msgpack");

    let mut engine = Engine::new(EngineConfig::new().with_model_path(&path));
    let loaded = engine.load(&MsgPackRepository).unwrap();

    assert!(!loaded);
    assert_eq!(engine.report().q_table_size, 0);
    assert_eq!(engine.stats().total_games, 0);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("models").join("brain.msgpack");

    let mut engine = Engine::new(EngineConfig::new().with_seed(1).with_model_path(&path));
    engine.train(10).unwrap();
    engine.save(&MsgPackRepository).unwrap();

    assert!(path.exists());
}

#[test]
fn reset_does_not_touch_the_persisted_snapshot() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("brain.msgpack");
    let repository = MsgPackRepository;

    let mut engine = Engine::new(EngineConfig::new().with_seed(8).with_model_path(&path));
    engine.train(50).unwrap();
    engine.save(&repository).unwrap();
    let saved_report = engine.report();

    engine.reset();
    assert_eq!(engine.report().q_table_size, 0);

    // The file still holds the trained state
    assert!(engine.load(&repository).unwrap());
    assert_eq!(engine.report(), saved_report);
}

#[test]
fn second_save_overwrites_the_first() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("brain.msgpack");
    let repository = MsgPackRepository;

    let mut engine = Engine::new(EngineConfig::new().with_seed(4).with_model_path(&path));
    engine.train(20).unwrap();
    engine.save(&repository).unwrap();

    engine.train(20).unwrap();
    engine.save(&repository).unwrap();
    let latest = engine.report();

    let mut fresh = Engine::new(EngineConfig::new().with_model_path(&path));
    fresh.load(&repository).unwrap();
    assert_eq!(fresh.report(), latest);
}
