//! The ledger: a genesis-rooted, append-only chain of blocks.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use lostfound_core::payload::keys;
use lostfound_core::{
    validate_chain, Block, BlockView, ChainError, Payload, PreviousHash, ReportEntry,
};

use crate::clock::{SystemTimeSource, TimeSource};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::receipt::Receipt;

/// Append-only hash-chained ledger.
///
/// The chain always holds at least the genesis block. Blocks are never
/// edited or removed after they are pushed.
pub struct Ledger {
    chain: RwLock<Vec<Block>>,
    clock: Arc<dyn TimeSource>,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with a fresh genesis block, stamped by the wall clock.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_time_source(config, Arc::new(SystemTimeSource))
    }

    /// Create a ledger with a fresh genesis block and an injected clock.
    pub fn with_time_source(config: LedgerConfig, clock: Arc<dyn TimeSource>) -> Self {
        let genesis = create_genesis(&config, clock.block_timestamp());
        debug!(hash = %genesis.hash().short_hex(16), "created genesis block");
        Self {
            chain: RwLock::new(vec![genesis]),
            clock,
            config,
        }
    }

    /// Rebuild a ledger from previously exported blocks.
    ///
    /// Structural problems are rejected here: an empty chain, a first block
    /// that is not genesis, or indices that are not `0, 1, 2, ...`. Hash and
    /// link integrity are left to [`Ledger::validate`], so a tampered export
    /// can still be loaded and inspected.
    pub fn from_blocks(
        config: LedgerConfig,
        blocks: Vec<Block>,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self> {
        match blocks.first() {
            None => return Err(LedgerError::InvalidChain("chain is empty".into())),
            Some(first) if !first.is_genesis() => {
                return Err(LedgerError::InvalidChain(
                    "first block is not a genesis block".into(),
                ))
            }
            Some(_) => {}
        }

        for (position, block) in blocks.iter().enumerate() {
            if block.index() != position as u64 {
                return Err(LedgerError::InvalidChain(format!(
                    "block at position {position} has index {}",
                    block.index()
                )));
            }
        }

        debug!(blocks = blocks.len(), "loaded ledger from blocks");
        Ok(Self {
            chain: RwLock::new(blocks),
            clock,
            config,
        })
    }

    /// Rebuild a ledger from serialized block views.
    pub fn from_views(
        config: LedgerConfig,
        views: Vec<BlockView>,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self> {
        Self::from_blocks(config, views.into_iter().map(Block::from).collect(), clock)
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an arbitrary payload.
    ///
    /// Payloads that claim to be report submissions (a `type` of `report` or
    /// a `report_id` key) must satisfy the [`ReportEntry`] contract, or
    /// nothing is appended.
    pub fn append(&self, payload: Payload) -> Result<Receipt> {
        if payload.is_report() || payload.contains_key(keys::REPORT_ID) {
            ReportEntry::from_payload(&payload).map_err(|e| {
                warn!(error = %e, "rejected malformed report payload");
                LedgerError::MalformedPayload(e.to_string())
            })?;
        }
        Ok(self.push(payload))
    }

    /// Append a report submission entry. Cannot fail.
    pub fn append_report(&self, entry: &ReportEntry) -> Receipt {
        self.push(entry.to_payload())
    }

    /// Read the head, build the next block and push it, all under one write
    /// lock so concurrent appends cannot fork the chain.
    fn push(&self, payload: Payload) -> Receipt {
        let mut chain = self.chain.write();
        let head = chain.last().expect("ledger always holds a genesis block");

        let block = Block::new(
            head.index() + 1,
            self.clock.block_timestamp(),
            payload,
            PreviousHash::Block(*head.hash()),
        );
        let receipt = Receipt::new(block.index(), *block.hash());

        debug!(
            index = block.index(),
            hash = %block.hash().short_hex(16),
            "appended block"
        );
        chain.push(block);
        receipt
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.chain.read().len()
    }

    /// Always false: a ledger is never without its genesis block.
    pub fn is_empty(&self) -> bool {
        self.chain.read().is_empty()
    }

    /// Receipt for the latest block.
    pub fn head(&self) -> Receipt {
        let chain = self.chain.read();
        let head = chain.last().expect("ledger always holds a genesis block");
        Receipt::new(head.index(), *head.hash())
    }

    pub fn genesis(&self) -> Block {
        self.chain.read()[0].clone()
    }

    pub fn get(&self, index: u64) -> Option<Block> {
        let index = usize::try_from(index).ok()?;
        self.chain.read().get(index).cloned()
    }

    /// First block, in chain order, whose payload satisfies `predicate`.
    pub fn find_by_predicate(&self, predicate: impl Fn(&Payload) -> bool) -> Option<Block> {
        self.chain
            .read()
            .iter()
            .find(|block| predicate(block.payload()))
            .cloned()
    }

    /// The submission block recorded for report `report_id`.
    pub fn find_report(&self, report_id: u64) -> Option<Block> {
        let wanted = i64::try_from(report_id).ok()?;
        self.find_by_predicate(|payload| {
            payload.is_report() && payload.report_id() == Some(wanted)
        })
    }

    /// Owned copy of every block, in order.
    pub fn blocks(&self) -> Vec<Block> {
        self.chain.read().clone()
    }

    /// Serializable copy of every block, in order.
    ///
    /// Later appends do not show up in a snapshot already taken.
    pub fn snapshot(&self) -> Vec<BlockView> {
        self.chain.read().iter().map(BlockView::from).collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Check every block's digest and link, reporting the first failure.
    pub fn validate(&self) -> std::result::Result<(), ChainError> {
        let chain = self.chain.read();
        let result = validate_chain(&chain);
        if let Err(ref e) = result {
            warn!(index = e.index(), error = %e, "ledger failed validation");
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("len", &self.len())
            .field("head", &self.head().display_id)
            .finish()
    }
}

fn create_genesis(config: &LedgerConfig, timestamp: String) -> Block {
    Block::new(
        0,
        timestamp,
        Payload::new().with(keys::MESSAGE, config.genesis_message.as_str()),
        PreviousHash::Genesis,
    )
}
