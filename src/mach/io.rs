/// Source of lines for `INPUT`. Called synchronously and allowed to block
/// for as long as it takes. An `Err` aborts the running program.
pub trait Input {
    fn read_line(&mut self) -> std::io::Result<String>;
}

/// Destination for `PRINT` values and input notices, one line per call.
pub trait Output {
    fn write_line(&mut self, s: &str);
}

impl<F> Input for F
where
    F: FnMut() -> std::io::Result<String>,
{
    fn read_line(&mut self) -> std::io::Result<String> {
        self()
    }
}

impl<F> Output for F
where
    F: FnMut(&str),
{
    fn write_line(&mut self, s: &str) {
        self(s)
    }
}

/// Replays a fixed script of input lines, then reports end of file.
#[derive(Debug, Default, Clone)]
pub struct Script {
    lines: std::collections::VecDeque<String>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Script
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Script {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Input for Script {
    fn read_line(&mut self) -> std::io::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "INPUT PAST END")
        })
    }
}
