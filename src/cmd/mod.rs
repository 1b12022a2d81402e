pub mod heroes;
pub mod march;
pub mod optimize;
pub mod talents;

use marchsync::error::{MarchError, MsResult};

/// Parses `NAME=LEVEL`. The last `=` splits, so names may contain one.
pub fn parse_level(s: &str) -> Result<(String, u8), String> {
    let (name, level) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=LEVEL, got '{}'", s))?;
    let level: u8 = level
        .trim()
        .parse()
        .map_err(|_| format!("invalid level in '{}'", s))?;
    Ok((name.trim().to_string(), level))
}

/// Parses `MAIN:DEPUTY`.
pub fn parse_pin(s: &str) -> Result<(String, String), String> {
    let (main, deputy) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MAIN:DEPUTY, got '{}'", s))?;
    Ok((main.trim().to_string(), deputy.trim().to_string()))
}

pub fn write_json<T: serde::Serialize>(value: &T) -> MsResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(MarchError::Json)?;
    println!("{}", text);
    Ok(())
}
