//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version, error::Result as ClapResult, parser::ValueSource,
    value_parser, Arg, ArgAction, Command,
};
use cli_life_lib::{SnapshotFormat, Symmetry, Topology};
use std::{path::PathBuf, time::Duration};

fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| String::from("expected two numbers separated by a comma"))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    Ok((x, y))
}

/// What to do with the board once it is set up.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Mode {
    /// Runs the interactive loop.
    Interactive,

    /// Prints the board for the given number of generations.
    Batch { generations: u64 },

    /// Prints the requested analyses and exits.
    Analysis {
        stable_phase: Option<i32>,
        explore_symmetry: Option<u64>,
        find: Option<PathBuf>,
    },
}

/// A struct to store the parse results.
#[derive(Clone, Debug)]
pub(crate) struct Args {
    pub(crate) settings: PathBuf,
    /// Whether the settings file was given explicitly.
    pub(crate) settings_given: bool,
    pub(crate) colony: Option<PathBuf>,
    pub(crate) colony_at: (usize, usize),
    pub(crate) seed: Option<u64>,
    pub(crate) topology: Option<Topology>,
    pub(crate) format: SnapshotFormat,
    pub(crate) symmetry: Symmetry,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub(crate) state_file: PathBuf,
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    pub(crate) interval: Duration,
    pub(crate) mode: Mode,
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life in the terminal\n\
             \n\
             The board is read from a settings file (JSON, YAML or TOML, \n\
             chosen by the extension), filled at random, and optionally \n\
             seeded with a colony read from a text file, where `*` is a \n\
             living cell and any other character a dead one.\n\
             \n\
             In the interactive view:\n\
             * [s] saves the board to the state file;\n\
             * [l] loads the board from the state file;\n\
             * [e] exports a snapshot and a PBM image of the board;\n\
             * [b] highlights the 2x2 blocks;\n\
             * [q] quits.\n",
        )
        .arg(
            Arg::new("SETTINGS")
                .help("Settings file")
                .long("settings")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("settings.json"),
        )
        .arg(
            Arg::new("COLONY")
                .help("A colony to put on the board")
                .long("colony")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("COLONY_AT")
                .help("Position of the top-left corner of the colony")
                .long("colony-at")
                .value_name("X,Y")
                .value_parser(parse_coord)
                .default_value("10,10"),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random source, overriding the settings file")
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("TOPOLOGY")
                .help("How the edges are connected, overriding the settings file")
                .long("topology")
                .value_parser(|s: &str| s.parse::<Topology>()),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Format of saved boards")
                .long_help(
                    "Format of saved boards\n\
                     \"plain\" writes `*` for living cells and spaces for dead ones.\n\
                     \"csv\" writes `1` and `0` separated by commas.\n",
                )
                .short('f')
                .long("format")
                .value_parser(|s: &str| s.parse::<SnapshotFormat>())
                .default_value("plain"),
        )
        .arg(
            Arg::new("SYMMETRY")
                .help("Symmetry shown in the status bar")
                .long("symmetry")
                .value_parser(|s: &str| s.parse::<Symmetry>())
                .default_value("point"),
        )
        .arg(
            Arg::new("STATE_FILE")
                .help("File used by the save and load commands")
                .long("state-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .default_value("game_state.txt"),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between generations")
                .short('i')
                .long("interval")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .default_value("1000"),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to print without the TUI")
                .short('g')
                .long("generations")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            Arg::new("STABLE_PHASE")
                .help("Estimates the stable phase time over the given number of trials")
                .long_help(
                    "Estimates the stable phase time over the given number of trials\n\
                     The first trial starts from the initial board, the others from \
                     random boards of the same density, all with clipped edges.\n",
                )
                .long("stable-phase")
                .value_name("TRIALS")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("EXPLORE_SYMMETRY")
                .help("Checks whether the board becomes its own mirror image")
                .long("explore-symmetry")
                .value_name("GENERATIONS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("FIND")
                .help("Searches the board for the pattern in the given file")
                .long("find")
                .value_name("PATTERN_FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("NOTUI")
                .help("Prints the generations instead of entering the TUI")
                .long_help(
                    "Prints the generations instead of entering the TUI\n\
                     \n\
                     Always on when built without the TUI.",
                )
                .short('n')
                .long("no-tui")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let settings = matches
            .get_one::<PathBuf>("SETTINGS")
            .cloned()
            .unwrap_or_default();
        let settings_given = matches.value_source("SETTINGS") != Some(ValueSource::DefaultValue);
        let colony = matches.get_one::<PathBuf>("COLONY").cloned();
        let colony_at = matches
            .get_one::<(usize, usize)>("COLONY_AT")
            .copied()
            .unwrap_or((10, 10));
        let seed = matches.get_one::<u64>("SEED").copied();
        let topology = matches.get_one::<Topology>("TOPOLOGY").copied();
        let format = matches
            .get_one::<SnapshotFormat>("FORMAT")
            .copied()
            .unwrap_or_default();
        let symmetry = matches
            .get_one::<Symmetry>("SYMMETRY")
            .copied()
            .unwrap_or_default();
        let state_file = matches
            .get_one::<PathBuf>("STATE_FILE")
            .cloned()
            .unwrap_or_default();
        let interval = matches
            .get_one::<u64>("INTERVAL")
            .map_or(Duration::from_millis(1000), |&ms| Duration::from_millis(ms));
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(10);

        let stable_phase = matches.get_one::<i32>("STABLE_PHASE").copied();
        let explore_symmetry = matches.get_one::<u64>("EXPLORE_SYMMETRY").copied();
        let find = matches.get_one::<PathBuf>("FIND").cloned();

        let no_tui = matches.get_flag("NOTUI") || cfg!(not(feature = "tui"));

        let mode = if stable_phase.is_some() || explore_symmetry.is_some() || find.is_some() {
            Mode::Analysis {
                stable_phase,
                explore_symmetry,
                find,
            }
        } else if no_tui {
            Mode::Batch { generations }
        } else {
            Mode::Interactive
        };

        Ok(Args {
            settings,
            settings_given,
            colony,
            colony_at,
            seed,
            topology,
            format,
            symmetry,
            state_file,
            interval,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["cli-life", "--no-tui"]).unwrap();
        assert_eq!(args.settings, PathBuf::from("settings.json"));
        assert!(!args.settings_given);
        assert_eq!(args.colony, None);
        assert_eq!(args.colony_at, (10, 10));
        assert_eq!(args.format, SnapshotFormat::Plaintext);
        assert_eq!(args.state_file, PathBuf::from("game_state.txt"));
        assert_eq!(args.interval, Duration::from_millis(1000));
        assert_eq!(args.mode, Mode::Batch { generations: 10 });
    }

    #[test]
    fn options() {
        let args = Args::parse_from([
            "cli-life",
            "--settings",
            "life.yaml",
            "--colony",
            "glider.txt",
            "--colony-at",
            "3,4",
            "--seed",
            "42",
            "--topology",
            "clipped",
            "--format",
            "csv",
            "--no-tui",
            "--generations",
            "5",
        ])
        .unwrap();
        assert!(args.settings_given);
        assert_eq!(args.colony, Some(PathBuf::from("glider.txt")));
        assert_eq!(args.colony_at, (3, 4));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.topology, Some(Topology::Clipped));
        assert_eq!(args.format, SnapshotFormat::Csv);
        assert_eq!(args.mode, Mode::Batch { generations: 5 });
    }

    #[test]
    fn interactive_needs_the_tui() {
        let args = Args::parse_from(["cli-life", "-n"]).unwrap();
        assert_eq!(args.mode, Mode::Batch { generations: 10 });
        let args = Args::parse_from(["cli-life"]).unwrap();
        if cfg!(feature = "tui") {
            assert_eq!(args.mode, Mode::Interactive);
        } else {
            assert_eq!(args.mode, Mode::Batch { generations: 10 });
        }
    }

    #[test]
    fn analysis() {
        let args = Args::parse_from(["cli-life", "--stable-phase", "-1", "--find", "block.txt"])
            .unwrap();
        assert_eq!(
            args.mode,
            Mode::Analysis {
                stable_phase: Some(-1),
                explore_symmetry: None,
                find: Some(PathBuf::from("block.txt")),
            }
        );
    }

    #[test]
    fn invalid_values() {
        assert!(Args::parse_from(["cli-life", "--colony-at", "3"]).is_err());
        assert!(Args::parse_from(["cli-life", "--topology", "sphere"]).is_err());
        assert!(Args::parse_from(["cli-life", "--interval", "-5"]).is_err());
    }
}
