use std::io;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),
}

/// A text sink the obj and mtl writers append to.
///
/// Every write reports the number of bytes it appended, so callers can account
/// for what they emitted without seeking the underlying stream.
pub trait TextWriter {
    fn write_text(&mut self, text: &str) -> Result<usize, Err>;

    fn write_line(&mut self, line: &str) -> Result<usize, Err> {
        Ok(self.write_text(line)? + self.write_text("\n")?)
    }
}

impl TextWriter for String {
    fn write_text(&mut self, text: &str) -> Result<usize, Err> {
        self.push_str(text);
        Ok(text.len())
    }
}

impl TextWriter for Vec<u8> {
    fn write_text(&mut self, text: &str) -> Result<usize, Err> {
        self.extend_from_slice(text.as_bytes());
        Ok(text.len())
    }
}

impl<T: TextWriter + ?Sized> TextWriter for &mut T {
    fn write_text(&mut self, text: &str) -> Result<usize, Err> {
        (**self).write_text(text)
    }

    fn write_line(&mut self, line: &str) -> Result<usize, Err> {
        (**self).write_line(line)
    }
}

/// Adapts any `io::Write` (a file, a `BufWriter`, stdout) into a `TextWriter`.
pub struct StreamWriter<W> {
    inner: W,
    written: u64,
}

impl<W: io::Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total number of bytes written through this adapter.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), Err> {
        Ok(self.inner.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> TextWriter for StreamWriter<W> {
    fn write_text(&mut self, text: &str) -> Result<usize, Err> {
        self.inner.write_all(text.as_bytes())?;
        self.written += text.len() as u64;
        Ok(text.len())
    }
}

pub struct FunctionalTextWriter<F> {
    write_fn: F,
}

impl<F: FnMut(&str)> FunctionalTextWriter<F> {
    pub fn new(write_fn: F) -> Self {
        FunctionalTextWriter { write_fn }
    }
}

impl<F: FnMut(&str)> TextWriter for FunctionalTextWriter<F> {
    fn write_text(&mut self, text: &str) -> Result<usize, Err> {
        (self.write_fn)(text);
        Ok(text.len())
    }
}
