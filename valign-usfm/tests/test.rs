use std::fs;
use std::path::Path;

use rstest::*;
use tempfile::tempdir;

use valign_core::errors::AlignError;
use valign_usfm::{convert_aligned_file, ConvertOptions, OrphanRangePolicy};

#[fixture]
fn path_to_vref() -> &'static str {
    "tests/data/vref_small.txt"
}

#[fixture]
fn path_to_aligned() -> &'static str {
    "tests/data/aligned_small.txt"
}

#[fixture]
fn path_to_aligned_gzipped() -> &'static str {
    "tests/data/aligned_small.txt.gz"
}

#[fixture]
fn path_to_aligned_short() -> &'static str {
    "tests/data/aligned_short.txt"
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_full_conversion(path_to_vref: &str, path_to_aligned: &str) {
        let out = tempdir().unwrap();

        let report = convert_aligned_file(
            Path::new(path_to_aligned),
            Path::new(path_to_vref),
            out.path(),
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(report.all_ok(), true);
        assert_eq!(report.written.len(), 2);

        let gen_sfm = fs::read_to_string(out.path().join("GEN.sfm")).unwrap();
        assert_eq!(
            gen_sfm,
            "\\id GEN\n\
             \\c 1\n\
             \\v 1-2 In the beginning...\n\
             \\c 2\n\
             \\v 1 Thus the heavens...\n"
        );

        let exo_sfm = fs::read_to_string(out.path().join("EXO.sfm")).unwrap();
        assert_eq!(
            exo_sfm,
            "\\id EXO\n\
             \\c 1\n\
             \\v 1-2 And these are the names...\n"
        );
    }

    #[rstest]
    fn test_gzipped_input(path_to_vref: &str, path_to_aligned_gzipped: &str) {
        let out = tempdir().unwrap();

        let report = convert_aligned_file(
            Path::new(path_to_aligned_gzipped),
            Path::new(path_to_vref),
            out.path(),
            &ConvertOptions::default(),
        )
        .unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(out.path().join("GEN.sfm").exists(), true);
    }

    #[rstest]
    fn test_single_book_filter(path_to_vref: &str, path_to_aligned: &str) {
        let out = tempdir().unwrap();

        let options = ConvertOptions {
            book: Some("EXO".to_string()),
            ..Default::default()
        };
        let report = convert_aligned_file(
            Path::new(path_to_aligned),
            Path::new(path_to_vref),
            out.path(),
            &options,
        )
        .unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(out.path().join("EXO.sfm").exists(), true);
        assert_eq!(out.path().join("GEN.sfm").exists(), false);
    }

    #[rstest]
    fn test_unknown_book_writes_nothing(path_to_vref: &str, path_to_aligned: &str) {
        let out = tempdir().unwrap();

        let options = ConvertOptions {
            book: Some("REV".to_string()),
            ..Default::default()
        };
        let result = convert_aligned_file(
            Path::new(path_to_aligned),
            Path::new(path_to_vref),
            out.path(),
            &options,
        );

        let err = result.unwrap_err();
        match err.downcast_ref::<AlignError>().unwrap() {
            AlignError::UnknownBook(code) => assert_eq!(code, "REV"),
            other => panic!("Expected UnknownBook, got {:?}", other),
        }
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[rstest]
    fn test_length_mismatch_writes_nothing(path_to_vref: &str, path_to_aligned_short: &str) {
        let out = tempdir().unwrap();

        let result = convert_aligned_file(
            Path::new(path_to_aligned_short),
            Path::new(path_to_vref),
            out.path(),
            &ConvertOptions::default(),
        );

        let err = result.unwrap_err();
        match err.downcast_ref::<AlignError>().unwrap() {
            AlignError::LengthMismatch { refs, lines } => {
                assert_eq!(*refs, 7);
                assert_eq!(*lines, 6);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[rstest]
    fn test_paratext_naming_and_subdirectory(path_to_vref: &str, path_to_aligned: &str) {
        let out = tempdir().unwrap();

        let options = ConvertOptions {
            project_id: Some("MalBT".to_string()),
            ..Default::default()
        };
        let report = convert_aligned_file(
            Path::new(path_to_aligned),
            Path::new(path_to_vref),
            out.path(),
            &options,
        )
        .unwrap();

        assert_eq!(report.all_ok(), true);
        let project_dir = out.path().join("MalBT");
        assert_eq!(project_dir.join("01GENMalBT.SFM").exists(), true);
        assert_eq!(project_dir.join("02EXOMalBT.SFM").exists(), true);
    }

    #[rstest]
    fn test_strict_ranges_on_clean_input(path_to_vref: &str, path_to_aligned: &str) {
        let out = tempdir().unwrap();

        let options = ConvertOptions {
            orphan_policy: OrphanRangePolicy::Strict,
            ..Default::default()
        };
        let report = convert_aligned_file(
            Path::new(path_to_aligned),
            Path::new(path_to_vref),
            out.path(),
            &options,
        )
        .unwrap();

        assert_eq!(report.all_ok(), true);
    }

    #[rstest]
    fn test_missing_input_file(path_to_vref: &str) {
        let out = tempdir().unwrap();

        let result = convert_aligned_file(
            Path::new("tests/data/does_not_exist.txt"),
            Path::new(path_to_vref),
            out.path(),
            &ConvertOptions::default(),
        );

        assert_eq!(result.is_err(), true);
    }
}
