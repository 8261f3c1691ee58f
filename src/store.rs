// fastq-pair/src/store.rs
//
// Record-oriented stream access: read 4-line FASTQ records with a byte
// position that can be seeked back to later, and write records, with gzip
// handled transparently on both sides. Compression is detected once from
// the stream content at open; callers never branch on it again.
//
// Positions are measured in *decompressed* bytes. On a plain file that is
// the real file offset; on a gzip stream a backward seek re-opens the
// decoder and discards forward, which is exactly the gzseek contract.

use crate::error::{PairError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One sequencing read: header, sequence, separator, quality. Lines keep
/// their terminators so records round-trip byte for byte.
#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub lines: [String; 4],
}

impl FastqRecord {
    pub fn header(&self) -> &str {
        &self.lines[0]
    }
}

/// Probe a file's first two bytes for the gzip magic number.
pub fn is_gzipped(path: &Path) -> Result<bool> {
    let mut file = File::open(path).map_err(|e| PairError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == GZIP_MAGIC),
        // Shorter than two bytes: cannot be gzip.
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(PairError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

enum Stream {
    Plain(BufReader<File>),
    Gzip(BufReader<GzDecoder<File>>),
}

/// Seekable reader over a FASTQ stream, plain or gzipped.
pub struct FastqReader {
    path: PathBuf,
    stream: Stream,
    gzip: bool,
    pos: u64,
}

impl FastqReader {
    /// Open `path`, sniffing the compression from its content.
    pub fn open(path: &Path) -> Result<Self> {
        let gzip = is_gzipped(path)?;
        let stream = Self::open_stream(path, gzip)?;
        Ok(FastqReader {
            path: path.to_path_buf(),
            stream,
            gzip,
            pos: 0,
        })
    }

    fn open_stream(path: &Path, gzip: bool) -> Result<Stream> {
        let file = File::open(path).map_err(|e| PairError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(if gzip {
            Stream::Gzip(BufReader::new(GzDecoder::new(file)))
        } else {
            Stream::Plain(BufReader::new(file))
        })
    }

    pub fn is_gzipped(&self) -> bool {
        self.gzip
    }

    /// Current position: the start offset of the next record to be read.
    pub fn position(&self) -> u64 {
        self.pos
    }

    fn io_err(&self, source: io::Error) -> PairError {
        PairError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let result = match &mut self.stream {
            Stream::Plain(r) => r.read_line(&mut line),
            Stream::Gzip(r) => r.read_line(&mut line),
        };
        let n = result.map_err(|e| self.io_err(e))?;
        if n == 0 {
            return Ok(None);
        }
        self.pos += n as u64;
        Ok(Some(line))
    }

    /// Read the next 4-line record, or `None` at a clean end of stream.
    ///
    /// A header with fewer than three following lines is a format violation
    /// reported against this stream and the record's start offset.
    pub fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        let start = self.pos;
        let Some(header) = self.read_line()? else {
            return Ok(None);
        };
        let mut lines = [header, String::new(), String::new(), String::new()];
        for line in lines.iter_mut().skip(1) {
            *line = self.read_line()?.ok_or(PairError::Truncated {
                path: self.path.clone(),
                offset: start,
            })?;
        }
        Ok(Some(FastqRecord { lines }))
    }

    /// Reposition to an offset previously returned by `position`.
    ///
    /// Plain streams seek directly. Gzip streams cannot seek backward, so
    /// the decoder is rebuilt from the start of the file and `offset`
    /// decompressed bytes are discarded.
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        match &mut self.stream {
            Stream::Plain(r) => {
                let result = r.seek(SeekFrom::Start(offset));
                result.map_err(|e| self.io_err(e))?;
                self.pos = offset;
                Ok(())
            }
            Stream::Gzip(_) => {
                if offset < self.pos {
                    self.stream = Self::open_stream(&self.path, true)?;
                    self.pos = 0;
                }
                self.discard(offset - self.pos)
            }
        }
    }

    fn discard(&mut self, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let result = match &mut self.stream {
            Stream::Plain(r) => io::copy(&mut r.by_ref().take(count), &mut io::sink()),
            Stream::Gzip(r) => io::copy(&mut r.by_ref().take(count), &mut io::sink()),
        };
        let skipped = result.map_err(|e| self.io_err(e))?;
        if skipped != count {
            return Err(self.io_err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("seek past end of stream (wanted offset +{count}, got +{skipped})"),
            )));
        }
        self.pos += count;
        Ok(())
    }
}

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

/// Writer for one output stream, gzip-compressing when asked to.
pub struct FastqWriter {
    path: PathBuf,
    sink: Sink,
}

impl FastqWriter {
    pub fn create(path: &Path, gzip: bool) -> Result<Self> {
        let file = File::create(path).map_err(|e| PairError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;
        let buf = BufWriter::new(file);
        let sink = if gzip {
            Sink::Gzip(GzEncoder::new(buf, Compression::default()))
        } else {
            Sink::Plain(buf)
        };
        Ok(FastqWriter {
            path: path.to_path_buf(),
            sink,
        })
    }

    /// Write one line verbatim; the caller supplies the terminator.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let result = match &mut self.sink {
            Sink::Plain(w) => w.write_all(line.as_bytes()),
            Sink::Gzip(w) => w.write_all(line.as_bytes()),
        };
        result.map_err(|e| PairError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    pub fn write_record(&mut self, record: &FastqRecord) -> Result<()> {
        for line in &record.lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Flush, and finish the gzip member if there is one.
    pub fn finish(self) -> Result<()> {
        let io_err = |path: &Path, e| PairError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        match self.sink {
            Sink::Plain(mut w) => w.flush().map_err(|e| io_err(&self.path, e)),
            Sink::Gzip(w) => {
                let mut buf = w.finish().map_err(|e| io_err(&self.path, e))?;
                buf.flush().map_err(|e| io_err(&self.path, e))
            }
        }
    }
}
