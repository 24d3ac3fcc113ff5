use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
    str::FromStr,
};

use crate::geometry::Point;

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

/// Reads whitespace separated tokens from a buffered reader. Line breaks carry no
/// meaning; a test case may span an arbitrary number of lines.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
    tokens_read: usize,
}

impl TokenReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            tokens_read: 0,
        }
    }

    /// Number of tokens consumed so far
    pub fn tokens_read(&self) -> usize {
        self.tokens_read
    }

    fn next_span(&mut self) -> Result<Option<(usize, usize)>> {
        loop {
            let rest = &self.line[self.pos..];
            self.pos += rest.len() - rest.trim_start().len();

            if self.pos < self.line.len() {
                let rest = &self.line[self.pos..];
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let begin = self.pos;
                self.pos += len;
                self.tokens_read += 1;
                return Ok(Some((begin, begin + len)));
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Returns the next token parsed as `T` or `None` if the input is exhausted.
    pub fn try_next<T: FromStr>(&mut self, what: &str) -> Result<Option<T>> {
        let Some((begin, end)) = self.next_span()? else {
            return Ok(None);
        };

        let parsed = self.line[begin..end].parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!(
                "Invalid value found. Cannot parse {} from `{}`.",
                what,
                &self.line[begin..end]
            )
        );

        Ok(parsed.ok())
    }

    /// Returns the next token parsed as `T`; a premature end of input is an error.
    pub fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        self.try_next(what)?.ok_or_else(|| {
            std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", what),
            )
        })
    }

    pub fn next_word(&mut self, what: &str) -> Result<String> {
        self.next(what)
    }

    pub fn next_vec<T: FromStr>(&mut self, len: usize, what: &str) -> Result<Vec<T>> {
        (0..len).map(|_| self.next(what)).collect()
    }

    /// Reads `len` characters ignoring whitespace, so grid rows may be given as words or as
    /// separate symbols
    pub fn next_chars(&mut self, len: usize, what: &str) -> Result<Vec<char>> {
        let mut chars = Vec::with_capacity(len);
        while chars.len() < len {
            let word = self.next_word(what)?;
            raise_error_unless!(
                chars.len() + word.chars().count() <= len,
                ErrorKind::InvalidData,
                format!("Too many symbols in {} `{}`.", what, word)
            );
            chars.extend(word.chars());
        }
        Ok(chars)
    }

    /// Reads two coordinates. Integral input coordinates are represented exactly.
    pub fn next_point(&mut self, what: &str) -> Result<Point> {
        let x = self.next(what)?;
        let y = self.next(what)?;
        Ok(Point::new(x, y))
    }
}
