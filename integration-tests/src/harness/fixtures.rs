use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn fixture_reader(name: &str) -> BufReader<File> {
    let path = fixture_path(name);
    let file = File::open(&path).unwrap_or_else(|e| panic!("open {}: {e}", path.display()));
    BufReader::new(file)
}

/// Parses a `<count> <key>` file into rows.
pub fn read_ranked_file(path: &Path) -> Vec<(u64, String)> {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
        .lines()
        .map(|line| {
            let (count, key) = line
                .split_once(' ')
                .unwrap_or_else(|| panic!("malformed row: {line:?}"));
            (count.parse().expect("numeric count"), key.to_string())
        })
        .collect()
}
