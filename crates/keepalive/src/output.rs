use std::io::{self, Write};

/// Success reports go to stdout
pub fn print_success(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Every failure kind goes to stderr
pub fn print_failure(s: &str) -> io::Result<()> {
    let mut err = io::stderr().lock();
    writeln!(err, "{s}")
}
