use std::convert::Infallible;

use clap::Args;
use common::util::extract_bits;

/// Extract a bit field from a 64-bit integer (bit 0 is the most significant)
#[derive(Args, Debug, Clone)]
pub struct Bits {
    /// The 64-bit word
    #[arg(long)]
    pub num: u64,

    /// Index of the first bit; negative values count from the low end
    #[arg(long, allow_negative_numbers = true)]
    pub start: i32,

    /// Number of bits to extract
    #[arg(long)]
    pub length: u32,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Bits {
    type Error = Infallible;
    type Output = String;

    async fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        Ok(match extract_bits(self.num, self.start, self.length) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!(start = self.start, length = self.length, "bit range out of bounds");
                "null".to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::op::Op;
    use crate::cli::ops::testutil::compact_ctx;

    async fn run(num: u64, start: i32, length: u32) -> String {
        Bits { num, start, length }
            .execute(&compact_ctx())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_bits_top_byte() {
        assert_eq!(run(0xAB00_0000_0000_0000, 0, 8).await, "171");
    }

    #[tokio::test]
    async fn test_bits_out_of_range_is_null() {
        assert_eq!(run(u64::MAX, 60, 8).await, "null");
    }
}
