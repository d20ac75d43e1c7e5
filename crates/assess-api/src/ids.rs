//! Injected id generation, keeping randomness out of the scoring path.

use assess_core::{RespondentId, TeamCode};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Length of generated team codes
pub const TEAM_CODE_LEN: usize = 6;

// No 0/O or 1/I, which are easy to mistype when shared verbally
const TEAM_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Source of fresh identifiers
pub trait IdGenerator: Send + Sync {
    fn respondent_id(&self) -> RespondentId;

    fn team_code(&self) -> TeamCode;
}

/// Random ids: v4 UUIDs and random team codes
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn respondent_id(&self) -> RespondentId {
        RespondentId::new()
    }

    fn team_code(&self) -> TeamCode {
        let mut rng = rand::thread_rng();
        let code = (0..TEAM_CODE_LEN)
            .map(|_| TEAM_CODE_ALPHABET[rng.gen_range(0..TEAM_CODE_ALPHABET.len())] as char)
            .collect();
        TeamCode(code)
    }
}

/// Deterministic ids for tests and replays
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SequentialIds {
    fn respondent_id(&self) -> RespondentId {
        RespondentId(Uuid::from_u128(u128::from(self.bump())))
    }

    fn team_code(&self) -> TeamCode {
        TeamCode(format!("TEAM{:02}", self.bump() % 100))
    }
}
