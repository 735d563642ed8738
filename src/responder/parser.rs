//! Block parser shared by the keyword and default response files.
//!
//! A file is a sequence of blocks separated by blank lines. Keyword files use
//! the first line of a block as its key; default files keep the whole block as
//! one reply. Body lines are stored verbatim, each followed by `\n`.

use std::{io, mem};

/// One parsed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Trimmed first line, present only for keyword blocks.
    pub header: Option<String>,
    pub body: String,
}

impl Block {
    fn push_line(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Keyed,
    Plain,
}

impl Variant {
    fn open(self, line: &str) -> Block {
        match self {
            Variant::Keyed => Block {
                header: Some(line.trim().to_string()),
                body: String::new(),
            },
            Variant::Plain => {
                let mut block = Block {
                    header: None,
                    body: String::new(),
                };
                block.push_line(line);
                block
            }
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    AwaitingHeader,
    Accumulating(Block),
}

/// Iterator turning a line sequence into blocks.
///
/// A read error is yielded once and ends the sequence; the block being built
/// at that point is dropped.
#[derive(Debug)]
pub struct Blocks<I> {
    lines: I,
    variant: Variant,
    state: State,
    done: bool,
}

impl<I> Blocks<I> {
    fn new(lines: I, variant: Variant) -> Self {
        Self {
            lines,
            variant,
            state: State::AwaitingHeader,
            done: false,
        }
    }

    fn feed(&mut self, line: &str) -> Option<Block> {
        if line.trim().is_empty() {
            return match mem::take(&mut self.state) {
                State::AwaitingHeader => None,
                State::Accumulating(block) => Some(block),
            };
        }

        match &mut self.state {
            State::AwaitingHeader => self.state = State::Accumulating(self.variant.open(line)),
            State::Accumulating(block) => block.push_line(line),
        }
        None
    }

    fn finish(&mut self) -> Option<Block> {
        match mem::take(&mut self.state) {
            State::Accumulating(block) if !block.body.is_empty() => Some(block),
            _ => None,
        }
    }
}

impl<I> Iterator for Blocks<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(block) = self.feed(&line) {
                        return Some(Ok(block));
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    self.state = State::AwaitingHeader;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    return self.finish().map(Ok);
                }
            }
        }
    }
}

/// Parses keyword blocks: the first non-blank line is the raw key, the
/// following lines up to a blank line are the reply.
///
/// A key followed directly by a blank line yields an empty reply; a key at end
/// of input with no body yields nothing.
pub fn keyed_blocks<I>(lines: I) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    Blocks::new(lines.into_iter(), Variant::Keyed)
}

/// Parses default reply blocks: every run of non-blank lines is one reply.
pub fn default_blocks<I>(lines: I) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    Blocks::new(lines.into_iter(), Variant::Plain)
}
