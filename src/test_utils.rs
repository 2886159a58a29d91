use std::path::PathBuf;

/// Home directory of the checked-in mock file system used by tests
pub fn get_mock_file_system_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/mock_file_system")
}
