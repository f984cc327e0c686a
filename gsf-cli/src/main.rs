//! gsf: recover the group seed behind a directory of entity records.
//!
//! Exit codes: 0 found (seed printed as decimal on stdout), 1 not found,
//! 2 usage or input error.

use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use gsf_core::mode::SpawnerModeSet;
use gsf_logging::{now_ms, EntityReversalEventV1, NdjsonWriter, RunResultEventV1};
use gsf_reverse::finder::DEFAULT_MAX_ROLLS;
use gsf_reverse::{Finder, FinderOptions};

fn print_help() {
    eprintln!(
        r#"gsf - group seed finder

USAGE:
    gsf <DIR> [OPTIONS]

ARGS:
    <DIR>    Directory of entity record files (2 to 4 decodable records)

OPTIONS:
    --max-rolls N    Personality re-roll bound, 1..=64 (default: 32)
    --modes LIST     Comma-separated spawner modes to probe, from
                     multi,single,mixed (default: multi,single)
    --log PATH       Append NDJSON run events to PATH
    -h, --help       Print this help message
    -V, --version    Print version

Prints the recovered group seed as a decimal u64 on success."#
    );
}

fn parse_modes(list: &str) -> Option<SpawnerModeSet> {
    let mut set = SpawnerModeSet::empty();
    for part in list.split(',') {
        set = match part.trim() {
            "multi" => set | SpawnerModeSet::MULTI,
            "single" => set | SpawnerModeSet::SINGLE,
            "mixed" => set | SpawnerModeSet::MIXED,
            _ => return None,
        };
    }
    if set.is_empty() {
        None
    } else {
        Some(set)
    }
}

struct Cli {
    dir: PathBuf,
    options: FinderOptions,
    log_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut dir: Option<PathBuf> = None;
    let mut max_rolls = DEFAULT_MAX_ROLLS;
    let mut modes = SpawnerModeSet::default();
    let mut log_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--max-rolls" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "Missing value for --max-rolls".to_string())?;
                max_rolls = value
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (1..=64).contains(n))
                    .ok_or_else(|| format!("Invalid --max-rolls value: {value}"))?;
                i += 2;
            }
            "--modes" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "Missing value for --modes".to_string())?;
                modes =
                    parse_modes(value).ok_or_else(|| format!("Invalid --modes value: {value}"))?;
                i += 2;
            }
            "--log" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "Missing value for --log".to_string())?;
                log_path = Some(PathBuf::from(value));
                i += 2;
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {other}"));
            }
            positional => {
                if dir.replace(PathBuf::from(positional)).is_some() {
                    return Err("Expected exactly one directory argument".to_string());
                }
                i += 1;
            }
        }
    }

    let dir = dir.ok_or_else(|| "Missing directory argument".to_string())?;
    Ok(Cli {
        dir,
        options: FinderOptions { max_rolls, modes },
        log_path,
    })
}

fn open_log(path: &PathBuf) -> Option<NdjsonWriter> {
    match NdjsonWriter::open_append(path) {
        Ok(w) => Some(w),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", path.display());
            None
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("gsf {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run `gsf --help` for usage.");
            process::exit(2);
        }
    };

    let records = match gsf_ingest::read_cohort(&cli.dir) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    eprintln!(
        "Reversing {} records (max rolls {}, modes {})...",
        records.len(),
        cli.options.max_rolls,
        cli.options.modes
    );

    let mut log = cli.log_path.as_ref().and_then(open_log);
    let started = Instant::now();
    let mut finder = Finder::new(cli.options);
    let found = finder.run(&records);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if let Some(log) = log.as_mut() {
        for (entity_index, entry) in finder.stats().per_entity.iter().enumerate() {
            // Logging must not affect the exit code; drop write errors.
            let _ = log.write_event(&EntityReversalEventV1 {
                event: "entity_reversal_v1",
                ts_ms: now_ms(),
                entity_index,
                entity_seed_candidates: entry.entity_seed_candidates,
                gen_seed_candidates: entry.gen_seed_candidates,
                validator_calls: entry.validator_calls,
                elapsed_ms: entry.elapsed_ms,
            });
        }
        let _ = log.write_event(&RunResultEventV1 {
            event: "run_result_v1",
            ts_ms: now_ms(),
            cohort_size: records.len(),
            max_rolls: cli.options.max_rolls,
            modes: cli.options.modes.to_string(),
            group_seed: found.map(|f| f.group_seed),
            first_index: found.map(|f| f.first_index),
            elapsed_ms,
        });
        let _ = log.flush();
    }

    match found {
        Some(find) => {
            eprintln!(
                "Found group seed from record {} in {:.1}s",
                find.first_index,
                elapsed_ms as f64 / 1000.0
            );
            println!("{}", find.group_seed);
        }
        None => {
            eprintln!("No group seed found");
            process::exit(1);
        }
    }
}
