use clap::{ArgAction::Count, Parser};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// URL of the directory index to list
    pub location: String,

    /// Extension of the files to list, without the leading dot
    #[arg(short, long, default_value = "fits")]
    pub extension: String,

    /// Fail when the directory cannot be fetched instead of listing nothing
    #[arg(long)]
    pub strict: bool,

    /// Turn debugging information on
    #[arg(short, long, action = Count)]
    pub verbose: u8,
}

pub fn parse() -> Args {
    Args::parse()
}
