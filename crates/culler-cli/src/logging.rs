use anyhow::Result;

use crate::config::LogLevel;

/// Install the twyg logger behind the `log` facade.
pub fn init(level: LogLevel) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(true)
        .level(level.into())
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logger options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {e:?}"))?;

    Ok(())
}
