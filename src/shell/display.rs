//! Outbound boundary: where the display text goes.

/// Receives the display text after every input.
///
/// The shell renders `text` verbatim. Any `FnMut(&str)` closure is a sink.
///
/// # Example
///
/// ```rust
/// use keycalc::input::Input;
/// use keycalc::shell::Session;
///
/// let mut frames = Vec::new();
/// let mut session = Session::new(|text: &str| frames.push(text.to_string()));
/// session.handle(Input::from_label("7").unwrap());
/// drop(session);
///
/// assert_eq!(frames, vec!["0", "7"]);
/// ```
pub trait DisplaySink {
    fn render(&mut self, text: &str);
}

impl<F> DisplaySink for F
where
    F: FnMut(&str),
{
    fn render(&mut self, text: &str) {
        self(text)
    }
}

/// Sink that remembers every rendered frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLog {
    frames: Vec<String>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The text currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl DisplaySink for DisplayLog {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_records_frames_in_order() {
        let mut log = DisplayLog::new();
        assert_eq!(log.current(), None);

        log.render("0");
        log.render("12");

        assert_eq!(log.frames(), ["0", "12"]);
        assert_eq!(log.current(), Some("12"));
    }

    #[test]
    fn closures_are_sinks() {
        let mut last = String::new();
        {
            let mut sink = |text: &str| last = text.to_string();
            sink.render("42");
        }
        assert_eq!(last, "42");
    }
}
