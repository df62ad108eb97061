use std::fmt::{self, Write};

use super::unit::{Class, Unit};

/// Writes units to a sink, separating kana and verbatim runs with one space.
pub struct RomajiWriter<W: Write> {
    out: W,
    previous: Option<Class>,
}

impl<W: Write> RomajiWriter<W> {
    pub fn new(out: W) -> Self {
        RomajiWriter {
            out,
            previous: None,
        }
    }

    pub fn push(&mut self, unit: &Unit<'_>) -> fmt::Result {
        let class = unit.class();
        if self.previous.is_some_and(|p| p != class) {
            self.out.write_char(' ')?;
        }
        self.previous = Some(class);
        write!(self.out, "{unit}")
    }

    /// Terminate the output with a newline and hand back the sink.
    pub fn finish(mut self) -> Result<W, fmt::Error> {
        self.out.write_char('\n')?;
        Ok(self.out)
    }
}
