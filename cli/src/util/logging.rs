use log::LevelFilter;
use std::io::Write;

use super::Args;

/// `--quiet` wins over `--trace`, which wins over `--debug`. Without flags only warnings and
/// errors are shown, so results on stdout stay readable.
pub(crate) fn log_level(args: &Args) -> LevelFilter {
    if args.quiet {
        LevelFilter::Off
    } else if args.trace {
        LevelFilter::Trace
    } else if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub(crate) fn setup_logger(level: LevelFilter) {
    env_logger::builder()
        .filter(None, level)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}:{}] - {} ",
                record.level(),
                record.module_path().unwrap_or_default(),
                record.line().unwrap_or_default(),
                record.args()
            )
        })
        .init();

    log::debug!("Set up logging at level {}.", level);
}
