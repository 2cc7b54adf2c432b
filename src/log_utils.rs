use flexi_logger::*;

use crate::error::Result;

/// Starts logging to stderr. The level comes from `RUST_LOG`, falling back to `info`.
/// The returned handle has to stay alive for as long as we want to log.
pub fn start_logger() -> Result<LoggerHandle> {
    let custom_format_fun = |
        w:      &mut dyn std::io::Write,
        now:    &mut DeferredNow,
        record: &Record
    | -> std::io::Result<()> {
        write!(
            w, "[{}] {} {}",
            now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK),
            record.level(),
            record.args()
        )
    };

    let handle = Logger::try_with_env_or_str("info")?
        .format(custom_format_fun)
        .start()?;

    Ok(handle)
}
