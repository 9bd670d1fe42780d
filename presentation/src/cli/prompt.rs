//! Prompt for the input file name when `--input` is not given.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Print `prompt` and read one line.
///
/// Returns `None` on EOF or a blank answer.
pub async fn read_input_name<R, W>(
    prompt: &str,
    reader: &mut R,
    out: &mut W,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    let name = line.trim();
    Ok((!name.is_empty()).then(|| name.to_string()))
}
