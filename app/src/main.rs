//! Command line front-end for the Quake 3 log analyser:
//!
//! ================================================================
//! Rebuilds the games from Quake3 Server log files, reporting their
//! kills, rankings & means of death -- or the overall statistics.
//! By default, reads from the file at './qgames.log'
//! ================================================================
//!
//! USAGE:
//!     app [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!         --stdin      Reads the log from the standard input instead of `--log-file`
//!     -V, --version    Prints version information
//!         --verbose    Outputs the dropped events & the parsing details to stderr
//!
//! OPTIONS:
//!         --log-file <log-file>    Input file with Quake3 Server log messages [default: qgames.log]
//!         --output <output>        What to output [default: report]  [possible values: report, json, total-kills,
//!                                  player-kills, means-usage, used-means-by-player]
//!
//! Explore some execution options:
//!  - ./target/debug/app --help
//!  - ./target/debug/app --log-file '<path_to_quake3_log_file>'                         # the per game report, with rankings
//!  - ./target/debug/app --output json --log-file '<path_to_quake3_log_file>'           # the games, as json
//!  - ./target/debug/app --output player-kills --stdin < '<path_to_quake3_log_file>'    # the leaderboard across all games
//!  - ./target/debug/app --verbose --log-file '<path_to_quake3_log_file>'               # also shows the kills that had to be dropped

mod command_line;

use command_line::{CommandLineOptions, OutputFormats};
use bll::api::LogAnalysis;
use bll_api::LogAnalysisApi;
use dal_api::{Quake3LogSource, Quake3LogSourceImplementations};
use std::io::{BufWriter, Write};
use std::sync::Arc;
use log::{error, LevelFilter};

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    simple_logger::SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(if command_line_options.verbose { LevelFilter::Trace } else { LevelFilter::Warn })
        .init()
        .unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    run(command_line_options)
        .map_err(|err| {
            error!("{err}");
            err
        })
}

fn run(command_line_options: CommandLineOptions) -> Result<(), Box<dyn std::error::Error>> {

    let dal_config = Arc::new(dal_api::Config {
        quake3_log_source_implementation: if command_line_options.stdin {
            Quake3LogSourceImplementations::StdinReader
        } else {
            Quake3LogSourceImplementations::SyncLogFileReader
        },
        debug: command_line_options.verbose,
    });
    let logic_config = bll::Config {
        log_issues: command_line_options.verbose,
        ..bll::Config::default()
    };
    let mut presentation_writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());

    let source_id = if command_line_options.stdin {
        dal::stdin_reader::STDIN_SOURCE_NAME
    } else {
        command_line_options.log_file.as_str()
    };
    let log_dao = || -> Box<dyn Quake3LogSource> {
        dal::factory::instantiate_log_dao(Arc::clone(&dal_config), &command_line_options.log_file)
    };
    let log_analysis = LogAnalysis::new(logic_config);

    match command_line_options.output {
        OutputFormats::Report            => presentation::to_report(&log_analysis.games(source_id, log_dao)?, &mut presentation_writer)?,
        OutputFormats::Json              => presentation::to_json(&log_analysis.games(source_id, log_dao)?, &mut presentation_writer)?,
        OutputFormats::TotalKills        => writeln!(presentation_writer, "{}", presentation::total_kills_json(log_analysis.total_kills(source_id, log_dao)?))?,
        OutputFormats::PlayerKills       => writeln!(presentation_writer, "{}", presentation::player_kills_json(&log_analysis.player_kills(source_id, log_dao)?))?,
        OutputFormats::MeansUsage        => writeln!(presentation_writer, "{}", presentation::means_usage_json(&log_analysis.means_usage(source_id, log_dao)?))?,
        OutputFormats::UsedMeansByPlayer => writeln!(presentation_writer, "{}", presentation::used_means_by_player_json(&log_analysis.used_means_by_player(source_id, log_dao)?))?,
    }
    presentation_writer.flush()?;

    Ok(())
}
