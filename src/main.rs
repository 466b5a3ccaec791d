// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line wrapper: build a dictionary from a word-list file, search
//! a 4x4 letter grid, print every found word-occurrence on its own line.
//!
//! Exit codes distinguish the failure kinds:
//! 0 success, 1 bad word-list format, 2 out of memory, 3 word-list file
//! unavailable, 4 usage error.

use std::env;
use std::fs::File;
use std::process::ExitCode;

use wordgrid_search::dictionary::{BuildError, Dictionary, WordReader};
use wordgrid_search::grid::{Grid, GRID_COLS, GRID_ROWS};
use wordgrid_search::search::{enumerate, Counters, PrintSink};

const EXIT_BAD_FORMAT: u8 = 1;
const EXIT_OUT_OF_MEMORY: u8 = 2;
const EXIT_SOURCE_UNAVAILABLE: u8 = 3;
const EXIT_USAGE: u8 = 4;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let grid_len = GRID_ROWS * GRID_COLS;
    if args.len() != 3 || args[2].len() != grid_len {
        eprintln!(
            "Usage: wordgrid <word-list-file> <grid-as-{}-chars-string>",
            grid_len
        );
        return ExitCode::from(EXIT_USAGE);
    }

    let file = match File::open(&args[1]) {
        Ok(file) => file,
        Err(_) => return report(BuildError::SourceUnavailable),
    };

    let mut reader = WordReader::new(file);
    let dict = match Dictionary::build_from_reader(&mut reader) {
        Ok(dict) => dict,
        Err(err) => return report(err),
    };

    let grid = Grid::new(GRID_ROWS, GRID_COLS, &args[2]);
    let stats = enumerate(&grid, &dict, &mut PrintSink);
    log::info!(
        "{} word-occurrences found",
        stats.get(Counters::WordsEmitted)
    );

    let allocated = dict.allocated_nodes();
    let released = dict.teardown();
    debug_assert_eq!(released, allocated, "trie teardown missed nodes");
    log::debug!("released {} of {} trie nodes", released, allocated);

    ExitCode::SUCCESS
}

fn report(err: BuildError) -> ExitCode {
    let code = match err {
        BuildError::BadFormat { .. } => EXIT_BAD_FORMAT,
        BuildError::OutOfMemory => EXIT_OUT_OF_MEMORY,
        BuildError::SourceUnavailable => EXIT_SOURCE_UNAVAILABLE,
    };
    eprintln!("ERROR: error code #{} ({})", code, err);
    ExitCode::from(code)
}
