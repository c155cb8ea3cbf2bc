use colored::*;

pub enum Kind {
    Result,
    Transcript,
    Warning,
    Fatal,
}

/// A colored tag in front of a message, printed to stderr.
pub struct Status(pub Kind, pub &'static str);

impl Status {
    pub fn result() -> Status {
        Status(Kind::Result, "Result")
    }
    pub fn transcript() -> Status {
        Status(Kind::Transcript, "Transcript")
    }
    pub fn warning() -> Status {
        Status(Kind::Warning, "Warning")
    }
    pub fn fatal() -> Status {
        Status(Kind::Fatal, "Fatal")
    }

    fn tag(&self) -> ColoredString {
        match self.0 {
            Kind::Result => self.1.green(),
            Kind::Transcript => self.1.blue(),
            Kind::Warning => self.1.yellow(),
            Kind::Fatal => self.1.red(),
        }
        .bold()
    }

    pub fn log(&self, message: &str) {
        eprintln!("{:>12} {}", self.tag(), message);
    }

    /// Logs each line under a single tag.
    pub fn lines(&self, lines: &[String]) {
        eprintln!("{:>12}", self.tag());
        for line in lines {
            eprintln!("{:>12} {}", "|".dimmed(), line);
        }
    }
}
