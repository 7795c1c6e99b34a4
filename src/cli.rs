//! Command-line options. The parsed struct is also the configuration passed
//! to every pipeline phase.

use std::path::PathBuf;

use clap::Parser;

use crate::dataset::FileEncoding;

/// Load the Superstore orders CSV into MongoDB and run the fixed query report.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the input CSV file.
    #[arg(long, default_value = "superstore.csv")]
    pub file: PathBuf,

    /// Text encoding of the input file. The published Superstore dataset is
    /// Latin-1.
    #[arg(long, value_enum, default_value_t = EncodingArg::Latin1)]
    pub encoding: EncodingArg,

    /// MongoDB connection URI.
    #[arg(long, default_value = "mongodb://localhost:27017", env = "MANGOLOAD_URI")]
    pub uri: String,

    /// Logical database name.
    #[arg(long, default_value = "SuperstoreDB")]
    pub database: String,

    /// Logical collection name.
    #[arg(long, default_value = "Orders")]
    pub collection: String,

    /// Server selection timeout, in seconds.
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Drop the collection before loading, so reruns don't accumulate
    /// duplicate documents.
    #[arg(long)]
    pub reset: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum EncodingArg {
    Utf8,
    Latin1,
}

impl From<EncodingArg> for FileEncoding {
    fn from(value: EncodingArg) -> Self {
        match value {
            EncodingArg::Utf8 => FileEncoding::Utf8,
            EncodingArg::Latin1 => FileEncoding::Latin1,
        }
    }
}
