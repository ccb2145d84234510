use std::io::{self, Read, Write};

#[cfg(feature = "tokio")]
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::Crc16;

const DEFAULT_BUF_CAPACITY: usize = 8192;

/// A wrapper around a reader or writer that checksums every byte passing through it.
pub struct Crc16Stream<S> {
    inner: S,
    digest: Crc16,
    buf_capacity: usize,
}

impl<S> Crc16Stream<S> {
    /// Creates a new [`Crc16Stream`] with an empty checksum.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            digest: Crc16::new(),
            buf_capacity: DEFAULT_BUF_CAPACITY,
        }
    }

    /// Creates a new [`Crc16Stream`] that drains its reader `buf_capacity` bytes at a time.
    pub fn with_capacity(inner: S, buf_capacity: usize) -> Self {
        let mut stream = Self::new(inner);
        stream.buf_capacity = buf_capacity.max(1);
        stream
    }

    /// Checksum of all the bytes transferred so far
    pub fn checksum(&self) -> u16 {
        self.digest.value()
    }

    pub fn reset(&mut self) {
        self.digest.reset();
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: Read> Read for Crc16Stream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes_read = self.inner.read(buf)?;
        self.digest.update(&buf[..bytes_read]);
        Ok(bytes_read)
    }
}

impl<S: Write> Write for Crc16Stream<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes_written = self.inner.write(buf)?;
        self.digest.update(&buf[..bytes_written]);
        Ok(bytes_written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<S: Read> Crc16Stream<S> {
    /// Reads the stream until EOF and returns the checksum.
    ///
    /// Bytes consumed by earlier reads are part of the result.
    ///
    /// # Errors
    ///
    /// If this function encounters any form of I/O or other error, an error variant will be returned as in [`Read::read`].
    /// [`io::ErrorKind::Interrupted`] is retried.
    pub fn read_checksum(&mut self) -> io::Result<u16> {
        let mut recv_buf = vec![0u8; self.buf_capacity];
        let mut total = 0usize;

        loop {
            let bytes_read = match self.read(&mut recv_buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            total += bytes_read;
        }

        log::debug!("drained {} bytes, crc16 {:#06x}", total, self.checksum());
        Ok(self.checksum())
    }
}

#[cfg(feature = "tokio")]
impl<S: AsyncRead + Unpin> Crc16Stream<S> {
    /// Reads some bytes into `buf` and folds them into the checksum.
    pub async fn read_async(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes_read = self.inner.read(buf).await?;
        self.digest.update(&buf[..bytes_read]);
        Ok(bytes_read)
    }

    /// Reads the stream until EOF and returns the checksum.
    ///
    /// # Errors
    ///
    /// If this function encounters any form of I/O or other error, an error variant will be returned as in [`AsyncReadExt::read`].
    pub async fn read_checksum_async(&mut self) -> io::Result<u16> {
        let mut recv_buf = vec![0u8; self.buf_capacity];
        let mut total = 0usize;

        loop {
            let bytes_read = self.read_async(&mut recv_buf).await?;
            if bytes_read == 0 {
                break;
            }
            total += bytes_read;
        }

        log::debug!("drained {} bytes, crc16 {:#06x}", total, self.checksum());
        Ok(self.checksum())
    }
}

#[cfg(feature = "tokio")]
impl<S: AsyncWrite + Unpin> Crc16Stream<S> {
    /// Writes the whole of `buf` and folds it into the checksum.
    pub async fn write_all_async(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf).await?;
        self.digest.update(buf);
        Ok(())
    }

    pub async fn flush_async(&mut self) -> io::Result<()> {
        self.inner.flush().await
    }
}
