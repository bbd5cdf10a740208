use crate::lib::diagnosis::Diagnosis;
use anyhow::Error;
use std::io::{self, Write};
use term::color::{Color, RED, YELLOW};

/// One labelled entry of an error report.
#[derive(Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub color: Color,
    pub label: &'static str,
    pub text: String,
    /// Put the text on its own line below the label.
    pub block: bool,
}

/// The error chain first, then the explanation and suggestion when present.
pub fn report_lines(err: &Error, diagnosis: Diagnosis) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = err
        .chain()
        .enumerate()
        .map(|(level, cause)| ReportLine {
            color: if level == 0 { RED } else { YELLOW },
            label: if level == 0 { "Error" } else { "Caused by" },
            text: cause.to_string(),
            block: false,
        })
        .collect();

    let (explanation, suggestion) = diagnosis;
    if let Some(explanation) = explanation {
        lines.push(ReportLine {
            color: YELLOW,
            label: "Error explanation",
            text: explanation,
            block: true,
        });
    }
    if let Some(suggestion) = suggestion {
        lines.push(ReportLine {
            color: YELLOW,
            label: "How to resolve the error",
            text: suggestion,
            block: true,
        });
    }
    lines
}

/// Prints the report to stderr, colored when stderr is a terminal that supports it.
pub fn print_error_and_diagnosis(err: &Error, diagnosis: Diagnosis) {
    let lines = report_lines(err, diagnosis);
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = match term::stderr() {
        Some(mut terminal) => write_colored(terminal.as_mut(), &lines),
        None => write_plain(&mut io::stderr().lock(), &lines),
    };
}

fn write_colored(terminal: &mut term::StderrTerminal, lines: &[ReportLine]) -> io::Result<()> {
    for line in lines {
        terminal.fg(line.color).map_err(io::Error::other)?;
        write!(terminal, "{}:", line.label)?;
        terminal.reset().map_err(io::Error::other)?;
        write_text(terminal, line)?;
    }
    Ok(())
}

pub fn write_plain(out: &mut dyn Write, lines: &[ReportLine]) -> io::Result<()> {
    for line in lines {
        write!(out, "{}:", line.label)?;
        write_text(out, line)?;
    }
    Ok(())
}

fn write_text<W: Write + ?Sized>(out: &mut W, line: &ReportLine) -> io::Result<()> {
    if line.block {
        writeln!(out)?;
        writeln!(out, "{}", line.text)
    } else {
        writeln!(out, " {}", line.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::diagnosis::NULL_DIAGNOSIS;
    use anyhow::Context;

    fn failure() -> Error {
        Err::<(), _>(anyhow::anyhow!("root cause"))
            .context("Failed to do the thing.")
            .unwrap_err()
    }

    #[test]
    fn chain_comes_first() {
        let lines = report_lines(&failure(), NULL_DIAGNOSIS);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Error");
        assert_eq!(lines[0].color, RED);
        assert_eq!(lines[0].text, "Failed to do the thing.");
        assert_eq!(lines[1].label, "Caused by");
        assert_eq!(lines[1].text, "root cause");
    }

    #[test]
    fn plain_rendering() {
        let diagnosis = (Some("why".to_string()), Some("fix".to_string()));
        let lines = report_lines(&failure(), diagnosis);
        let mut out = Vec::new();
        write_plain(&mut out, &lines).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Failed to do the thing.\n\
             Caused by: root cause\n\
             Error explanation:\n\
             why\n\
             How to resolve the error:\n\
             fix\n"
        );
    }
}
