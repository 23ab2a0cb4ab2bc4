use clap::Parser;
use naegele::CalendarDate;

/// Estimated due date and weeks of amenorrhea by Naegele's rule.
#[derive(Parser)]
#[command(
    name = "naegele",
    version,
    about = "Estimated due date and weeks of amenorrhea from an LNMP"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Last normal menstrual period, dd/mm/yyyy.
    #[arg(value_name = "LNMP")]
    pub lnmp: String,

    /// Count weeks of amenorrhea up to local midnight of this date
    /// (dd/mm/yyyy) instead of now.
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<CalendarDate>,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    pub json: bool,
}
