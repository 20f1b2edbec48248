use std::io::{self, BufRead, Write};

/// Question and answer over an explicit input and output, so nothing reaches
/// for the process wide stdin.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and reads one line, without its line ending.
    ///
    /// Fails with `UnexpectedEof` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer to `{}`", question.trim()),
            ));
        }
        let answer_len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(answer_len);
        Ok(answer)
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
