mod cli;
mod logging;

use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use naegele::{
    Amenorrhea, CalendarDate, ErrorKind, FixedClock, SystemClock, TimeSource, estimated_due_date,
    parse_lnmp, weeks_of_amenorrhea,
};
use serde::Serialize;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[derive(Debug, Serialize)]
struct Report {
    lnmp: CalendarDate,
    edd:  CalendarDate,
    woa:  Amenorrhea,
}

fn report<C: TimeSource>(lnmp: &str, clock: &C) -> Result<Report, ErrorKind> {
    let lnmp = parse_lnmp(lnmp)?;
    let edd = estimated_due_date(&lnmp)?;
    let woa = weeks_of_amenorrhea(&lnmp, clock)?;
    Ok(Report { lnmp, edd, woa })
}

fn run(cli: &Cli) -> Result<()> {
    let report = match &cli.as_of {
        Some(date) => {
            tracing::info!(as_of = %date, "measuring against a pinned date");
            report(&cli.lnmp, &FixedClock::at_midnight(Local, date)?)?
        }
        None => report(&cli.lnmp, &SystemClock)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("EDD: {}", report.edd);
        println!("WOA: {}", report.woa);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_report() {
        let as_of: CalendarDate = "11/03/2024".parse().unwrap();
        let clock = FixedClock::at_midnight(Utc, &as_of).unwrap();
        let report = report("01/03/2024", &clock).unwrap();
        assert_eq!(report.edd.to_string(), "08/12/2024");
        assert_eq!(report.woa.to_string(), "1 week, 3 days");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lnmp"], "01/03/2024");
        assert_eq!(json["edd"], "08/12/2024");
        assert_eq!(json["woa"]["weeks"], 1);
        assert_eq!(json["woa"]["days"], 3);
    }

    #[test]
    fn test_report_errors() {
        let clock = FixedClock::at_midnight(Utc, &"11/03/2024".parse().unwrap()).unwrap();
        assert_eq!(
            report("32/01/2024", &clock).unwrap_err(),
            ErrorKind::InvalidDate
        );
        assert_eq!(
            report("12/03/2024", &clock).unwrap_err(),
            ErrorKind::FutureDate
        );
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["naegele", "-vv", "--as-of", "11/03/2024", "01/03/2024"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.lnmp, "01/03/2024");
        assert_eq!(cli.as_of.map(|d| d.to_string()).as_deref(), Some("11/03/2024"));
        assert!(!cli.json);

        assert!(Cli::try_parse_from(["naegele", "--as-of", "bad", "01/03/2024"]).is_err());
        assert!(Cli::try_parse_from(["naegele"]).is_err());
    }
}
