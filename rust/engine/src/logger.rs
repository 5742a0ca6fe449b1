use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::score::Score;

/// One line of the hand-history log: the finished hand, its score, and the
/// session accounting after payout. Serialized to JSONL for storage and
/// replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Timestamp when the hand finished (RFC3339); injected at write time
    /// when absent
    #[serde(default)]
    pub ts: Option<String>,
    /// RNG seed the session was created with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Wager in effect for the hand
    pub wager: u32,
    /// The five cards held at scoring time
    pub cards: Vec<Card>,
    /// The classification the hand scored as
    pub score: Score,
    /// Credits paid out
    pub payout: u32,
    /// Credit balance after the payout
    pub credits: i64,
}

/// Formats a hand id from a `YYYYMMDD` date and a 1-based sequence number.
pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file, one line per hand, flushing
/// after every write, and issues the sequential hand ids for the day.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// An id-only logger with a fixed date and no backing file; `write` is
    /// a no-op.
    pub fn with_date(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
