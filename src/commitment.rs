//! Canonical byte encoding of request commitments.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! block_number        u64
//! len(station_id)     u64
//! station_id          UTF-8 bytes
//! upper_bound         u64
//! len(requester)      u64
//! requester_address   UTF-8 bytes
//! extra_args          u8
//! ```
//!
//! Strings are length-prefixed so that two distinct commitments never encode
//! to the same bytes. The layout is a wire format; changing it breaks every
//! proof produced over previously encoded commitments.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const U64_LEN: usize = 8;

/// Size of the encoding when both strings are empty.
const FIXED_LEN: usize = 4 * U64_LEN + 1;

/// A randomness request, bound into every proof as the signed message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestCommitment {
    block_number: u64,
    station_id: String,
    upper_bound: u64,
    requester_address: String,
    extra_args: u8,
}

impl RequestCommitment {
    /// Creates a commitment from its fields.
    ///
    /// `upper_bound` is carried for downstream consumers and not validated.
    pub fn new(
        block_number: u64,
        station_id: impl Into<String>,
        upper_bound: u64,
        requester_address: impl Into<String>,
        extra_args: u8,
    ) -> Self {
        Self {
            block_number,
            station_id: station_id.into(),
            upper_bound,
            requester_address: requester_address.into(),
            extra_args,
        }
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }

    pub fn requester_address(&self) -> &str {
        &self.requester_address
    }

    pub fn extra_args(&self) -> u8 {
        self.extra_args
    }

    /// Exact length of [`RequestCommitment::encode`]'s output.
    pub fn encoded_len(&self) -> usize {
        FIXED_LEN + self.station_id.len() + self.requester_address.len()
    }

    /// Serializes the commitment into its canonical byte form.
    pub fn encode(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(self.encoded_len());
        v.extend_from_slice(&self.block_number.to_be_bytes());
        put_str(&mut v, &self.station_id);
        v.extend_from_slice(&self.upper_bound.to_be_bytes());
        put_str(&mut v, &self.requester_address);
        v.push(self.extra_args);
        v
    }

    /// Parses a canonical encoding back into a commitment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEncoding`] if a field is truncated, a length
    /// prefix overruns the buffer, a string is not UTF-8, or bytes remain
    /// after the final field.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut r = Reader { buf: bytes, pos: 0 };

        let block_number = r.u64("block_number")?;
        let station_id = r.string("station_id")?;
        let upper_bound = r.u64("upper_bound")?;
        let requester_address = r.string("requester_address")?;
        let extra_args = r.take(1, "extra_args")?[0];

        if r.pos != bytes.len() {
            return Err(Error::MalformedEncoding(format!(
                "{} trailing bytes after commitment",
                bytes.len() - r.pos
            )));
        }

        Ok(Self {
            block_number,
            station_id,
            upper_bound,
            requester_address,
            extra_args,
        })
    }
}

fn put_str(v: &mut Vec<u8>, s: &str) {
    v.extend_from_slice(&(s.len() as u64).to_be_bytes());
    v.extend_from_slice(s.as_bytes());
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize, field: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| Error::MalformedEncoding(format!("truncated {field}")))?;
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn u64(&mut self, field: &str) -> Result<u64> {
        let mut arr = [0u8; U64_LEN];
        arr.copy_from_slice(self.take(U64_LEN, field)?);
        Ok(u64::from_be_bytes(arr))
    }

    fn string(&mut self, field: &str) -> Result<String> {
        let len = self.u64(field)?;
        let len = usize::try_from(len)
            .map_err(|_| Error::MalformedEncoding(format!("{field} length overflows")))?;
        let raw = self.take(len, field)?;
        String::from_utf8(raw.to_vec())
            .map_err(|_| Error::MalformedEncoding(format!("{field} is not valid UTF-8")))
    }
}
