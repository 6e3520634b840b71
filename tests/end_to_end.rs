use anyhow::Result;
use faceval::{evaluate, pairs, report, store, EmbeddingStore, IndexTable, Metric};
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("faceval-test-{}-{}", std::process::id(), name));
    p
}

/// Round-trip embedding records through the on-disk format, parse a pairs
/// file, and run the full evaluation exactly as the CLI wires it up.
#[test]
fn test_evaluate_from_files() -> Result<()> {
    let records = vec![
        store::EmbeddingRecord {
            identity: "Ada_Lovelace".into(),
            image: 1,
            vector: vec![1.0, 0.0],
        },
        store::EmbeddingRecord {
            identity: "Ada_Lovelace".into(),
            image: 4,
            vector: vec![0.95, (1.0f32 - 0.95 * 0.95).sqrt()],
        },
        store::EmbeddingRecord {
            identity: "Grace_Hopper".into(),
            image: 1,
            vector: vec![0.05, (1.0f32 - 0.05 * 0.05).sqrt()],
        },
    ];

    let store_path = scratch_file("faces.bin");
    store::save_records(&store_path, &records)?;
    let loaded = store::load_records(&store_path)?;
    std::fs::remove_file(&store_path).ok();
    assert_eq!(loaded.len(), records.len());
    assert_eq!(loaded[1].identity, "Ada_Lovelace");
    assert_eq!(loaded[1].image, 4);

    let embedding_store = EmbeddingStore::from_records(&loaded)?;
    let index_table = IndexTable::from_records(&loaded);

    let lists = pairs::parse_pairs(
        "2\t1\n\
         Ada_Lovelace\t1\t4\n\
         Ada_Lovelace\t1\tGrace_Hopper\t1\n",
    )?;
    assert_eq!(lists.matched.len(), 1);
    assert_eq!(lists.mismatched.len(), 1);

    let verification = evaluate(
        &lists.matched,
        &lists.mismatched,
        &index_table,
        &embedding_store,
        Metric::Cosine,
        0.70,
    )?;

    // Matched pair distance 0.05, mismatched pair distance 0.95
    assert_eq!(verification.matched.correct, 1);
    assert_eq!(verification.mismatched.correct, 1);

    let mut buf = Vec::new();
    report::write_report(&mut buf, &verification)?;
    let text = String::from_utf8(buf)?;
    assert!(text.contains("Correct Number: [MatchedPairs] 1"));
    assert!(text.contains("Ratio: [MismatchedPairs] 1.0000"));

    println!("✓ File-backed evaluation:\n{}", text);
    Ok(())
}

/// A pairs file referencing an identity absent from the store fails the
/// whole run rather than skipping the record.
#[test]
fn test_evaluate_from_files_unknown_identity() -> Result<()> {
    let records = vec![store::EmbeddingRecord {
        identity: "Ada_Lovelace".into(),
        image: 1,
        vector: vec![1.0, 0.0],
    }];
    let embedding_store = EmbeddingStore::from_records(&records)?;
    let index_table = IndexTable::from_records(&records);

    let lists = pairs::parse_pairs("Charles_Babbage\t1\t2\n")?;
    let result = evaluate(
        &lists.matched,
        &lists.mismatched,
        &index_table,
        &embedding_store,
        Metric::Cosine,
        0.70,
    );

    assert!(result.is_err());
    Ok(())
}
