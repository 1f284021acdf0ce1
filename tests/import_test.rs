use movie_store::{CatalogError, MovieRepository, MovieStore};
use std::io::{Cursor, Write};
use tempfile::{NamedTempFile, TempDir};

const SAMPLE: &str = "\
Dune,Sci-Fi,1984,8.0,137,true
BadLine,OnlyThreeFields,1999
Nope,Drama,1700,5.0,90,false
Matrix,Sci-Fi,1999,8.7,136,true
";

fn titles(store: &MovieStore) -> Vec<String> {
    store.list_all().into_iter().map(|m| m.title).collect()
}

#[test]
fn test_import_sample_counts_only_valid_lines() {
    let mut store = MovieStore::new();
    let count = store.import_from(Cursor::new(SAMPLE)).unwrap();

    assert_eq!(count, 2);
    assert_eq!(titles(&store), vec!["Dune", "Matrix"]);
}

#[test]
fn test_import_trims_fields_and_skips_blank_lines() {
    let input = "\n   \n  Alien ,  Horror , 1979 , 8.5 , 117 , TRUE  \r\n\nHeat,Crime,1995,8.3,170,nope\n";
    let mut store = MovieStore::new();

    assert_eq!(store.import_from(Cursor::new(input)).unwrap(), 2);

    let alien = store.find("alien").unwrap();
    assert_eq!(alien.title, "Alien");
    assert_eq!(alien.genre, "Horror");
    assert!(alien.available);
    assert!(!store.find("heat").unwrap().available);
}

#[test]
fn test_import_skips_unparsable_numbers() {
    let input = "\
A,Drama,20x0,5.0,90,true
B,Drama,2000,five,90,true
C,Drama,2000,5.0,1.5,true
D,Drama,2000,5.0,90,true
";
    let mut store = MovieStore::new();
    assert_eq!(store.import_from(Cursor::new(input)).unwrap(), 1);
    assert_eq!(titles(&store), vec!["D"]);
}

#[test]
fn test_import_skips_lines_with_extra_fields() {
    let input = "Dune,Sci-Fi,1984,8.0,137,true,extra\nDune,Sci-Fi,1984,8.0,137\n";
    let mut store = MovieStore::new();
    assert_eq!(store.import_from(Cursor::new(input)).unwrap(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_import_appends_to_existing_records() {
    let mut store = MovieStore::new();
    assert!(store.create("Heat", "Crime", 1995, 8.3, 170, true));

    assert_eq!(store.import_from(Cursor::new(SAMPLE)).unwrap(), 2);
    assert_eq!(titles(&store), vec!["Heat", "Dune", "Matrix"]);
}

#[test]
fn test_import_file_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let mut store = MovieStore::new();
    assert_eq!(store.import_file(file.path()).unwrap(), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_import_missing_file_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");

    let mut store = MovieStore::new();
    let err = store.import_file(&missing).unwrap_err();

    assert!(err.is_source_unavailable());
    match err {
        CatalogError::SourceUnavailable { path, source } => {
            assert!(path.ends_with("missing.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.is_empty());
}

#[test]
fn test_import_with_summary_reports_skips() {
    let mut store = MovieStore::new();
    let summary = store.import_with_summary(Cursor::new(SAMPLE)).unwrap();
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 2);
}

#[test]
fn test_import_ignores_trailing_empty_fields() {
    let mut store = MovieStore::new();
    let count = store
        .import_from(Cursor::new("Dune,Sci-Fi,1984,8.0,137,true,,\n"))
        .unwrap();
    assert_eq!(count, 1);
    assert!(store.find("dune").unwrap().available);

    let mut store = MovieStore::new();
    let count = store
        .import_from(Cursor::new("Dune,Sci-Fi,1984,8.0,137,\n"))
        .unwrap();
    assert_eq!(count, 0);
    assert!(store.is_empty());
}

#[test]
fn test_import_directory_is_source_unavailable() {
    let dir = TempDir::new().unwrap();

    let mut store = MovieStore::new();
    let err = store.import_file(dir.path()).unwrap_err();

    assert!(err.is_source_unavailable());
    assert!(err.user_friendly_message().starts_with("File not found: "));
}
