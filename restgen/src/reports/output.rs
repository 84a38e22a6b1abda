//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render generated code exactly as given.
    fn code(&mut self, code: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Messages go to stderr; results and code go to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn code(&mut self, code: &str) {
        print!("{}", code);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output that records everything into one string.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub text: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        self.text.push_str(&format!("{}: {}\n", key, value));
    }

    fn error(&mut self, msg: &str) {
        self.text.push_str(&format!("error: {}\n", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.text.push_str(&format!("warning: {}\n", msg));
    }

    fn preformatted(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn code(&mut self, code: &str) {
        self.text.push_str(code);
    }

    fn newline(&mut self) {
        self.text.push('\n');
    }
}
