/// Separator between resumes in a pasted batch.
pub const RESUME_SEPARATOR: &str = "###";

/// Splits a resume batch on `###`, trimming each segment and dropping empty ones.
/// Segments are not deduplicated.
pub fn split_resumes(batch: &str) -> Vec<String> {
    batch
        .split(RESUME_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
