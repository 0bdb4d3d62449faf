use std::{
    fs,
    path::{Path, PathBuf},
};

use dashmap::DashMap;
use log::debug;
use rayon::prelude::*;

use crate::{SourceStripper, StripError, StripReport};

const STRIPPED_SUFFIX: &str = "_no_comments";

impl SourceStripper {
    /// Strips every `(input, output)` pair in parallel.
    ///
    /// Results are keyed by input path. A failing file does not stop the others.
    pub fn strip_many(
        &self,
        jobs: &[(PathBuf, PathBuf)],
    ) -> DashMap<PathBuf, Result<StripReport, StripError>> {
        let results = DashMap::new();
        jobs.par_iter().for_each(|(input, output)| {
            results.insert(input.clone(), self.run_paths(input, output));
        });
        results
    }
}

/// Pairs each `*.sol` file directly under `dir` with a sibling
/// `<stem>_no_comments.sol`, skipping files that already carry that suffix.
pub fn batch_jobs(dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>, StripError> {
    let list_err = |source| StripError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut jobs = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "sol") {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if !stem.ends_with(STRIPPED_SUFFIX) => stem.to_string(),
            _ => {
                debug!("skipping {}", path.display());
                continue;
            }
        };
        let output = path.with_file_name(format!("{}{}.sol", stem, STRIPPED_SUFFIX));
        jobs.push((path, output));
    }
    jobs.sort();
    Ok(jobs)
}
