use crate::srt::Subtitle;

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Writes the records to the output path as a compact JSON array,
/// overwriting any existing file.
pub fn serialise<P: AsRef<Path>>(subs: &[Subtitle], output: P) -> Result<()> {
    let file = std::fs::File::create(output).context("Failed to create output file.")?;
    let mut writer = BufWriter::new(file);
    write_subs(&mut writer, subs).context("Failed to write to output file.")?;
    writer.flush().context("Failed to write to output file.")?;
    Ok(())
}

fn write_subs<W: Write>(buf: &mut W, subs: &[Subtitle]) -> Result<()> {
    serde_json::to_writer(buf, subs).context("Failed to serialise subtitles.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use std::io::Cursor;

    fn written(subs: &[Subtitle]) -> String {
        let mut buf = Cursor::new(vec![]);

        write_subs(&mut buf, subs).expect("Failed to write to buffer");

        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn no_records_serialise_to_an_empty_array() {
        assert_eq!(written(&[]), "[]");
    }

    #[test]
    fn records_serialise_with_lower_case_keys_in_field_order() {
        let subs = Parser::new().parse("1\n00:00:01,000 --> 00:00:02,500\nHello world\n");

        assert_eq!(
            written(&subs),
            r#"[{"index":1,"start":"00:00:01,000","end":"00:00:02,500","text":"Hello world\n"}]"#
        );
    }

    #[test]
    fn text_is_json_escaped() {
        let subs = Parser::new().parse("1\n00:00:01,000 --> 00:00:02,000\nsay \"hi\"\n");

        assert_eq!(
            written(&subs),
            r#"[{"index":1,"start":"00:00:01,000","end":"00:00:02,000","text":"say \"hi\"\n"}]"#
        );
    }

    #[test]
    fn array_order_follows_record_order() {
        let subs = Parser::new().parse(
            "2\n00:00:03,000 --> 00:00:04,000\nsecond\n\n\
             1\n00:00:01,000 --> 00:00:02,000\nfirst\n",
        );

        let json = written(&subs);

        assert!(json.starts_with(r#"[{"index":2"#));
        assert!(json.contains(r#"{"index":1"#));
    }
}
