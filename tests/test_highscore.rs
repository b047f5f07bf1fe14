use flappy_bird::highscore::{FileScoreStore, ScoreStore};

use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileScoreStore {
    FileScoreStore::new(dir.path().join("highscore.txt"))
}

#[test]
fn missing_file_loads_zero() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    assert_eq!(store.load(), 0);
}

#[test]
fn corrupt_file_loads_zero() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    for junk in ["abc", "", "-3", "12.5", "99999999999999999999"] {
        std::fs::write(store.path(), junk).unwrap();
        assert_eq!(store.load(), 0, "content {:?}", junk);
    }
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    std::fs::write(store.path(), "  42\n").unwrap();
    assert_eq!(store.load(), 42);
}

#[test]
fn save_writes_bare_decimal() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(7);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "7");
    assert_eq!(store.load(), 7);
}

#[test]
fn save_overwrites_previous_value() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(1234);
    store.save(5);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "5");
}

#[test]
fn save_failure_is_silent() {
    let dir = TempDir::new().unwrap();
    let mut store = FileScoreStore::new(dir.path().join("no/such/dir/highscore.txt"));
    store.save(10);
    assert_eq!(store.load(), 0);
}
