//! Byte-stream helpers over `Read`, `Write` and `Seek`
//!
//! Readers never fail: an I/O error yields an empty result and a debug log.
//! Whole-stream reads leave the cursor where they found it.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

/// Anything that can be read and repositioned
pub trait SeekRead: Read + Seek {}

impl<T: Read + Seek> SeekRead for T {}

/// Streams whose content can be discarded before a rewrite
pub trait Truncate {
    fn truncate_all(&mut self) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate_all(&mut self) -> io::Result<()> {
        self.set_len(0)?;
        self.rewind()
    }
}

impl Truncate for Cursor<Vec<u8>> {
    fn truncate_all(&mut self) -> io::Result<()> {
        self.get_mut().clear();
        self.set_position(0);
        Ok(())
    }
}

pub trait ByteStreamExt: Read + Seek {
    /// Full content regardless of the current position
    fn to_bytes(&mut self) -> Vec<u8> {
        let result = (|| -> io::Result<Vec<u8>> {
            let original = self.stream_position()?;
            self.rewind()?;
            let mut buffer = Vec::new();
            self.read_to_end(&mut buffer)?;
            self.seek(SeekFrom::Start(original))?;
            Ok(buffer)
        })();
        result.unwrap_or_else(|e| {
            debug!("Stream read failed: {}", e);
            Vec::new()
        })
    }

    /// Full content as UTF-8, invalid sequences replaced
    fn to_text(&mut self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }

    /// Up to `count` bytes starting at `offset`; empty when `offset` is past the end
    fn read_bytes(&mut self, offset: u64, count: usize) -> Vec<u8> {
        if count == 0 || offset >= self.get_length() {
            return Vec::new();
        }
        let result = (|| -> io::Result<Vec<u8>> {
            let original = self.stream_position()?;
            self.seek(SeekFrom::Start(offset))?;
            let mut buffer = Vec::with_capacity(count);
            Read::take(&mut *self, count as u64).read_to_end(&mut buffer)?;
            self.seek(SeekFrom::Start(original))?;
            Ok(buffer)
        })();
        result.unwrap_or_else(|e| {
            debug!("Stream range read failed: {}", e);
            Vec::new()
        })
    }

    fn read_text(&mut self, offset: u64, count: usize) -> String {
        String::from_utf8_lossy(&self.read_bytes(offset, count)).into_owned()
    }

    fn get_length(&mut self) -> u64 {
        let result = (|| -> io::Result<u64> {
            let original = self.stream_position()?;
            let length = self.seek(SeekFrom::End(0))?;
            self.seek(SeekFrom::Start(original))?;
            Ok(length)
        })();
        result.unwrap_or(0)
    }

    fn is_empty_stream(&mut self) -> bool {
        self.get_length() == 0
    }

    fn get_position(&mut self) -> u64 {
        self.stream_position().unwrap_or(0)
    }

    /// Positions outside `0..=len` are ignored
    fn set_position_safe(&mut self, position: u64) {
        if position <= self.get_length() {
            let _ = self.seek(SeekFrom::Start(position));
        }
    }

    fn reset_position(&mut self) {
        let _ = self.rewind();
    }

    /// Copy everything from the start into `target`; returns the bytes copied
    fn copy_to_stream<W: Write + ?Sized>(&mut self, target: &mut W) -> u64 {
        let result = (|| -> io::Result<u64> {
            self.rewind()?;
            let copied = io::copy(self, target)?;
            target.flush()?;
            Ok(copied)
        })();
        result.unwrap_or_else(|e| {
            debug!("Stream copy failed: {}", e);
            0
        })
    }

    /// Write the full content to `path`, replacing any existing file
    fn save_to_file(&mut self, path: impl AsRef<Path>) -> io::Result<u64> {
        let mut file = File::create(path.as_ref())?;
        self.rewind()?;
        let copied = io::copy(self, &mut file)?;
        file.flush()?;
        Ok(copied)
    }
}

impl<T: Read + Seek + ?Sized> ByteStreamExt for T {}

pub trait StreamWriteExt: Write + Seek + Truncate {
    /// Replace the content with `text`
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Replace the content with `bytes`
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.truncate_all()?;
        self.write_all(bytes)?;
        self.flush()
    }
}

impl<T: Write + Seek + Truncate> StreamWriteExt for T {}

/// Read-only stream over a file; an empty stream when the file cannot be opened
pub fn open_file_stream(path: impl AsRef<Path>) -> Box<dyn SeekRead> {
    match File::open(path.as_ref()) {
        Ok(file) => Box::new(file),
        Err(e) => {
            debug!("Opening {:?} failed: {}", path.as_ref(), e);
            Box::new(Cursor::new(Vec::new()))
        }
    }
}

pub fn text_to_stream(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

pub fn bytes_to_stream(bytes: &[u8]) -> Cursor<Vec<u8>> {
    Cursor::new(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_to_bytes_restores_position() {
        let mut stream = text_to_stream("hello world");
        stream.set_position_safe(6);
        assert_eq!(stream.to_bytes(), b"hello world");
        assert_eq!(stream.get_position(), 6);
        assert_eq!(stream.to_text(), "hello world");
    }

    #[test]
    fn test_write_replaces_content() {
        let mut stream = text_to_stream("a much longer original text");
        stream.write_text("short").unwrap();
        assert_eq!(stream.to_text(), "short");

        stream.write_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(stream.to_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_read_range() {
        let mut stream = text_to_stream("0123456789");
        assert_eq!(stream.read_text(2, 3), "234");
        assert_eq!(stream.read_bytes(8, 10), b"89");
        assert!(stream.read_bytes(10, 1).is_empty());
        assert!(stream.read_bytes(0, 0).is_empty());
        assert_eq!(stream.get_position(), 0);
    }

    #[test]
    fn test_positioning() {
        let mut stream = bytes_to_stream(&[0; 4]);
        assert_eq!(stream.get_length(), 4);
        stream.set_position_safe(4);
        assert_eq!(stream.get_position(), 4);
        stream.set_position_safe(5);
        assert_eq!(stream.get_position(), 4);
        stream.reset_position();
        assert_eq!(stream.get_position(), 0);
        assert!(!stream.is_empty_stream());
        assert!(bytes_to_stream(&[]).is_empty_stream());
    }

    #[test]
    fn test_copy_to_stream() {
        let mut source = text_to_stream("copy me");
        source.set_position_safe(3);
        let mut target = Vec::new();
        assert_eq!(source.copy_to_stream(&mut target), 7);
        assert_eq!(target, b"copy me");
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stream.txt");

        let mut source = text_to_stream("saved");
        assert_eq!(source.save_to_file(&path).unwrap(), 5);

        let mut reopened = open_file_stream(&path);
        assert_eq!(reopened.to_text(), "saved");

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();
        file.write_text("new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_file_is_empty_stream() {
        let temp_dir = TempDir::new().unwrap();
        let mut stream = open_file_stream(temp_dir.path().join("missing.bin"));
        assert!(stream.to_bytes().is_empty());
        assert_eq!(stream.get_length(), 0);
    }
}
