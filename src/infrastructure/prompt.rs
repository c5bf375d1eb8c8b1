//! Stdin title prompter

use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::application::ports::TitlePrompter;

/// Reads one title line per upload from stdin.
///
/// The reader lives for the whole session: input typed ahead of the next
/// prompt stays buffered instead of being dropped between prompts.
pub struct StdinPrompter {
    reader: Mutex<BufReader<Stdin>>,
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TitlePrompter for StdinPrompter {
    async fn prompt_title(&self) -> io::Result<String> {
        print!("title: ");
        io::stdout().flush()?;

        let mut reader = self.reader.lock().await;
        read_title(&mut *reader).await
    }
}

async fn read_title<R>(reader: &mut R) -> io::Result<String>
where
    R: AsyncBufRead + Unpin + Send,
{
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;

    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed during title prompt",
        ));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn consecutive_reads_share_buffered_input() {
        // Both lines arrive in one buffer; the second prompt must still
        // see the second line.
        let mut reader = BufReader::new(&b"First clip\nSecond clip\n"[..]);

        assert_eq!(read_title(&mut reader).await.unwrap(), "First clip");
        assert_eq!(read_title(&mut reader).await.unwrap(), "Second clip");
    }

    #[tokio::test]
    async fn windows_line_endings_are_trimmed() {
        let mut reader = BufReader::new(&b"Title\r\n"[..]);

        assert_eq!(read_title(&mut reader).await.unwrap(), "Title");
    }

    #[tokio::test]
    async fn closed_input_is_an_unexpected_eof() {
        let mut reader = BufReader::new(&b""[..]);

        let err = read_title(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
