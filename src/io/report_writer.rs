use csv_async::AsyncSerializer;
use futures::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::StockRecord;

/// Line written when no record qualified
pub const NONE_FOUND: &str = "none\n";

/// Write the reduction result
///
/// A found record is written as a headed CSV document with a single row.
/// Otherwise [`NONE_FOUND`] is written. The writer is flushed either way.
pub async fn write_result<W>(best: Option<&StockRecord>, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    match best {
        Some(record) => {
            let mut serializer = AsyncSerializer::from_writer(writer);
            serializer.serialize(record).await?;
            serializer.flush().await?;
        }
        None => {
            writer.write_all(NONE_FOUND.as_bytes()).await?;
            writer.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_found_record_with_header() {
        let record = StockRecord::new("Z", "2020-01-03", "", Some(15.0), "INCREASED");
        let mut output = Vec::new();

        write_result(Some(&record), &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert_eq!(
            result,
            "name,date,notes,value,change\nZ,2020-01-03,,15.0,INCREASED\n"
        );
    }

    #[tokio::test]
    async fn writes_notes_and_fractional_value() {
        let record = StockRecord::new("ACME", "2021-06-30", "split", Some(20.25), "INCREASED");
        let mut output = Vec::new();

        write_result(Some(&record), &mut output).await.unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.ends_with("ACME,2021-06-30,split,20.25,INCREASED\n"));
    }

    #[tokio::test]
    async fn writes_none_marker() {
        let mut output = Vec::new();

        write_result(None, &mut output).await.unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), NONE_FOUND);
    }
}
