/*!
 * End-to-end catalog file tests: real input and output files on disk,
 * deterministic stub providers
 */

use std::fs;

use potrans::processor::CatalogProcessor;
use potrans::providers::mock::MockProvider;
use tempfile::tempdir;

/// Test the full file pass: open, translate, write, flush
#[tokio::test]
async fn test_processFile_withUntranslatedCatalog_shouldWriteTranslatedCopy() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("app.po");
    let output_path = dir.path().join("app.es.po");

    fs::write(
        &input_path,
        "# greeting\nmsgid \"Cat\"\nmsgstr \"\"\n\nmsgid \"Dog\"\nmsgstr \"Perro\"\n",
    )
    .unwrap();

    let provider = MockProvider::canned("Gato");
    let processor = CatalogProcessor::new(&provider, "es");

    let stats = processor.process_file(&input_path, &output_path).await.unwrap();

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        output,
        "# greeting\nmsgid \"Cat\"\nmsgstr \"Gato\"\n\nmsgid \"Dog\"\nmsgstr \"Perro\"\n"
    );
    assert_eq!(stats.translated, 1);
    assert_eq!(stats.already_translated, 1);

    // The input file is never rewritten in place
    let input_after = fs::read_to_string(&input_path).unwrap();
    assert!(input_after.contains("msgstr \"\""));
}

/// Test a missing input file aborts before any output is produced
#[tokio::test]
async fn test_processFile_withMissingInput_shouldFail() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("does-not-exist.po");
    let output_path = dir.path().join("out.po");

    let provider = MockProvider::working();
    let processor = CatalogProcessor::new(&provider, "es");

    let result = processor.process_file(&input_path, &output_path).await;

    assert!(result.is_err());
    assert!(!output_path.exists());
}

/// Test the pass over a realistic catalog shape, header included
#[tokio::test]
async fn test_processFile_withRealisticCatalog_shouldPreserveStructure() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("messages.po");
    let output_path = dir.path().join("messages.de.po");

    let input = "\
# German translations for demo.
# This file is distributed under the same license as the demo package.
msgid \"\"
msgstr \"\"
\"Project-Id-Version: demo 1.0\\n\"
\"Language: de\\n\"

#: src/ui.rs:12
msgid \"Open\"
msgstr \"\"

#: src/ui.rs:18
msgid \"\"
\"A long sentence \"
\"split over lines\"
msgstr \"\"

#: src/ui.rs:25
msgid \"Close\"
msgstr \"Schliessen\"
";
    fs::write(&input_path, input).unwrap();

    let provider = MockProvider::working();
    let processor = CatalogProcessor::new(&provider, "de");

    let stats = processor.process_file(&input_path, &output_path).await.unwrap();
    let output = fs::read_to_string(&output_path).unwrap();

    assert_eq!(stats.translated, 2);
    assert_eq!(stats.already_translated, 1);
    assert!(output.contains("msgstr \"[de] Open\""));
    assert!(output.contains("msgstr \"[de] A long sentence split over lines\""));
    assert!(output.contains("msgstr \"Schliessen\""));
    // Comments, references and the header block survive untouched
    assert!(output.contains("# German translations for demo."));
    assert!(output.contains("#: src/ui.rs:18"));
    assert!(output.contains("\"Project-Id-Version: demo 1.0\\n\""));
    assert_eq!(input.lines().count(), output.lines().count());
}
