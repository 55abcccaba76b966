//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::{Display, EnumString, EnumVariantNames};


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
================================================================
Rebuilds the games from Quake3 Server log files, reporting their
kills, rankings & means of death -- or the overall statistics.
By default, reads from the file at './qgames.log'
================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs the dropped events & the parsing details to stderr
    #[structopt(long)]
    pub verbose: bool,

    /// Reads the log from the standard input instead of `--log-file`
    #[structopt(long)]
    pub stdin: bool,


    // OPTIONS
    //////////

    /// Input file with Quake3 Server log messages
    #[structopt(long, default_value = "qgames.log")]
    pub log_file: String,

    /// What to output
    #[structopt(long, default_value = "report", possible_values = OutputFormats::VARIANTS)]
    pub output: OutputFormats,

}

/// The available outputs: the games (as a report or as json) or one of the statistics across all games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormats {
    Report,
    Json,
    TotalKills,
    PlayerKills,
    MeansUsage,
    UsedMeansByPlayer,
}

pub fn parse_from_args() -> CommandLineOptions {
    CommandLineOptions::from_args()
}
