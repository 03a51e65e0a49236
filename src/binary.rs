use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Number of leading bytes inspected for a NUL.
pub const SAMPLE_SIZE: u64 = 1024;

/// Reports whether `path` looks binary: a zero byte in its first [`SAMPLE_SIZE`] bytes.
///
/// A file that cannot be sampled is reported as binary so its content is
/// left out instead of failing the run.
pub fn is_binary(path: &Path) -> bool {
    let mut sample = Vec::with_capacity(SAMPLE_SIZE as usize);
    let read = File::open(path).and_then(|file| file.take(SAMPLE_SIZE).read_to_end(&mut sample));
    match read {
        Ok(_) => sample.contains(&0),
        Err(e) => {
            warn!("Failed to sample {} for binary detection: {}", path.display(), e);
            true
        }
    }
}
