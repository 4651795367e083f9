//! # CLI Command Implementations
//!
//! File reading plus the actual implementations of the CLI commands.

use joltcount_core::{
    ChainError, Level, ReachGraph, count_arrangements, gap_sequence, level_sequence,
    tally_step_sizes,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum input file size (10 MB).
///
/// A ratings file is a short list of small integers; anything larger is a
/// mistake, and the limit prevents memory exhaustion from a mis-specified
/// path.
const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), ChainError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ChainError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(ChainError::Io(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// INPUT READING
// =============================================================================

/// Read newline-delimited adapter ratings from a text file.
///
/// Blank lines are ignored. Non-empty lines that do not parse as an
/// unsigned integer are skipped with a warning rather than failing the
/// whole run, matching the lenient reader this tool replaces.
fn read_ratings(path: &PathBuf) -> Result<Vec<Level>, ChainError> {
    validate_file_size(path, MAX_INPUT_FILE_SIZE)?;

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ChainError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

    let mut ratings = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<Level>() {
            Ok(rating) => ratings.push(rating),
            Err(_) => {
                tracing::warn!("Couldn't parse line {}: <{}>", lineno + 1, trimmed);
            }
        }
    }
    Ok(ratings)
}

// =============================================================================
// TALLY COMMAND
// =============================================================================

/// Tally the 1-jolt and 3-jolt steps of the chain.
pub fn cmd_tally(file: &PathBuf, json_mode: bool) -> Result<(), ChainError> {
    let ratings = read_ratings(file)?;
    let tally = tally_step_sizes(&ratings)?;

    if json_mode {
        let output = serde_json::json!({
            "ones": tally.ones,
            "threes": tally.threes,
            "product": tally.product(),
        });
        println!("{}", output);
    } else {
        println!("1-jolt steps: {}", tally.ones);
        println!("3-jolt steps: {}", tally.threes);
        println!("Product:      {}", tally.product());
    }
    Ok(())
}

// =============================================================================
// ARRANGEMENTS COMMAND
// =============================================================================

/// Count the distinct valid arrangements of the chain.
pub fn cmd_arrangements(file: &PathBuf, json_mode: bool) -> Result<(), ChainError> {
    let ratings = read_ratings(file)?;
    let count = count_arrangements(&ratings)?;

    if json_mode {
        let output = serde_json::json!({ "arrangements": count });
        println!("{}", output);
    } else {
        println!("Arrangements: {}", count);
    }
    Ok(())
}

// =============================================================================
// LEVELS COMMAND
// =============================================================================

/// Show the derived level sequence with gaps and per-level reach.
pub fn cmd_levels(file: &PathBuf, json_mode: bool) -> Result<(), ChainError> {
    let ratings = read_ratings(file)?;
    let levels = level_sequence(&ratings)?;
    let gaps = gap_sequence(&levels);
    let graph = ReachGraph::from_levels(&levels);

    if json_mode {
        let rows: Vec<serde_json::Value> = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                serde_json::json!({
                    "level": level,
                    "gap_to_next": gaps.get(i),
                    "reachable": graph.out_degree(level),
                })
            })
            .collect();
        let output = serde_json::json!({ "levels": rows });
        println!("{}", output);
    } else {
        println!("{:>10}  {:>11}  {:>9}", "level", "gap to next", "reachable");
        for (i, &level) in levels.iter().enumerate() {
            let gap = gaps
                .get(i)
                .map_or_else(|| "-".to_string(), |g| g.to_string());
            println!("{:>10}  {:>11}  {:>9}", level, gap, graph.out_degree(level));
        }
    }
    Ok(())
}

// =============================================================================
// SOLVE COMMAND
// =============================================================================

/// Run both counts over one input file.
pub fn cmd_solve(file: &PathBuf, json_mode: bool) -> Result<(), ChainError> {
    let ratings = read_ratings(file)?;
    let tally = tally_step_sizes(&ratings)?;
    let count = count_arrangements(&ratings)?;

    if json_mode {
        let output = serde_json::json!({
            "tally": {
                "ones": tally.ones,
                "threes": tally.threes,
                "product": tally.product(),
            },
            "arrangements": count,
        });
        println!("{}", output);
    } else {
        println!("Tally product: {}", tally.product());
        println!("Arrangements:  {}", count);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(lines.as_bytes()).expect("write");
        file
    }

    #[test]
    fn reads_ratings_line_by_line() {
        let input = write_input("16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n");
        let ratings = read_ratings(&input.path().to_path_buf()).expect("read");
        assert_eq!(ratings, vec![16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4]);
    }

    #[test]
    fn skips_blank_and_garbage_lines() {
        let input = write_input("1\n\nnot-a-number\n 2 \n");
        let ratings = read_ratings(&input.path().to_path_buf()).expect("read");
        assert_eq!(ratings, vec![1, 2]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_ratings(&PathBuf::from("/no/such/ratings.txt"));
        assert!(matches!(result, Err(ChainError::Io(_))));
    }

    #[test]
    fn commands_run_end_to_end() {
        let input = write_input("16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n");
        let path = input.path().to_path_buf();

        cmd_tally(&path, false).expect("tally");
        cmd_arrangements(&path, true).expect("arrangements");
        cmd_levels(&path, false).expect("levels");
        cmd_solve(&path, true).expect("solve");
    }

    #[test]
    fn empty_file_surfaces_empty_input() {
        let input = write_input("\n\n");
        let result = cmd_arrangements(&input.path().to_path_buf(), false);
        assert_eq!(result, Err(ChainError::EmptyInput));
    }
}
