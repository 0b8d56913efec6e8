use crate::request::GenerationRequest;
use std::io::{self, Write};

/// Writes the parameters and the sequence as plain text:
/// one `name: value` line per parameter, a blank line, `Sequence:`,
/// then the elements separated by `", "`.
pub fn write_report<W: Write>(mut writer: W, request: &GenerationRequest, sequence: &[u64]) -> io::Result<()> {
    writeln!(writer, "m: {}", request.modulus().get())?;
    writeln!(writer, "a: {}", request.multiplier())?;
    writeln!(writer, "c: {}", request.increment())?;
    writeln!(writer, "x0: {}", request.seed())?;
    writeln!(writer, "n: {}", request.length())?;
    writeln!(writer)?;
    writeln!(writer, "Sequence:")?;
    for (i, x) in sequence.iter().enumerate() {
        if i > 0 {
            writer.write_all(b", ")?;
        }
        write!(writer, "{}", x)?;
    }
    writer.flush()
}
