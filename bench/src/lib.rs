//! Scenario generation for benchmarking the bytecoder codec.
//!
//! This crate provides:
//!
//! - A deterministic entity simulation producing one [`Frame`] per tick
//! - Codec impls for the frame types, with a count-prefixed entity list
//! - Serde mirrors of the same data for comparison against `bincode`
//!
//! # Design Principles
//!
//! - **Reproducible** - All scenarios are deterministic given a seed.
//! - **Comparable** - Both codecs see exactly the same values.

use codec::{ByteSize, CodecResult, Decode, Decoder, Encode, Encoder, FieldSizes};
use serde::{Deserialize, Serialize};

pub const POS_MIN: i64 = -100_000;
pub const POS_MAX: i64 = 100_000;
pub const VEL_MIN: i64 = -10_000;
pub const VEL_MAX: i64 = 10_000;

bitflags::bitflags! {
    /// Per-entity state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StateFlags: u8 {
        const CROUCHED = 1 << 0;
        const FIRING = 1 << 1;
        const RELOADING = 1 << 2;
    }
}

codec::flags_codec!(StateFlags);

/// One simulated entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityState {
    pub id: u32,
    pub position: (i64, i64, i64),
    pub velocity: (i64, i64, i64),
    pub yaw: u16,
    pub label: String,
    pub flags: StateFlags,
}

codec::keyed_struct! {
    EntityState { id, position, velocity, yaw, label, flags }
}

/// Every entity at one tick, preceded by the number of entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tick: u32,
    pub entities: Vec<EntityState>,
}

impl Encode for Frame {
    fn encode(&self, encoder: &mut Encoder<'_>) -> CodecResult<()> {
        let mut container = encoder.keyed();
        container.encode("tick", &self.tick)?;
        container.encode("count", &self.entities.len())?;
        container.encode("entities", &self.entities)
    }
}

impl Decode for Frame {
    fn decode(decoder: &mut Decoder<'_, '_>) -> CodecResult<Self> {
        let mut container = decoder.keyed();
        let tick = container.decode("tick")?;
        let count: usize = container.decode("count")?;
        let entities = container
            .nested_unkeyed("entities")
            .decode_counted(count)?;
        Ok(Self { tick, entities })
    }
}

impl ByteSize for Frame {
    fn visit_fields(&self, fields: &mut FieldSizes) {
        fields
            .field(&self.tick)
            .field(&self.entities.len())
            .field(&self.entities);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeFrame {
    pub tick: u32,
    pub entities: Vec<SerdeEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeEntity {
    pub id: u32,
    pub position: (i64, i64, i64),
    pub velocity: (i64, i64, i64),
    pub yaw: u16,
    pub label: String,
    pub flags: u8,
}

impl From<&Frame> for SerdeFrame {
    fn from(frame: &Frame) -> Self {
        Self {
            tick: frame.tick,
            entities: frame
                .entities
                .iter()
                .map(|state| SerdeEntity {
                    id: state.id,
                    position: state.position,
                    velocity: state.velocity,
                    yaw: state.yaw,
                    label: state.label.clone(),
                    flags: state.flags.bits(),
                })
                .collect(),
        }
    }
}

/// Small LCG; good enough for repeatable scenarios.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }

    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min).unsigned_abs().max(1) + 1;
        let value = u64::from(self.next_u32()) % span;
        min + value as i64
    }
}

/// Spawns `players` entities at random positions.
pub fn init_states(players: u32, rng: &mut Rng) -> Vec<EntityState> {
    (0..players)
        .map(|idx| EntityState {
            id: idx + 1,
            position: (
                rng.range_i64(POS_MIN / 2, POS_MAX / 2),
                rng.range_i64(POS_MIN / 2, POS_MAX / 2),
                rng.range_i64(POS_MIN / 2, POS_MAX / 2),
            ),
            velocity: (
                rng.range_i64(VEL_MIN / 10, VEL_MAX / 10),
                rng.range_i64(VEL_MIN / 10, VEL_MAX / 10),
                rng.range_i64(VEL_MIN / 10, VEL_MAX / 10),
            ),
            yaw: (rng.next_u32() % 4096) as u16,
            label: format!("player-{}", idx + 1),
            flags: StateFlags::empty(),
        })
        .collect()
}

/// Advances every entity by one tick.
pub fn step_states(states: &mut [EntityState], rng: &mut Rng, tick: u32, burst: Option<u32>) {
    let burst_now = burst.is_some_and(|every| every > 0 && tick % every == 0);
    for state in states {
        step_axis(&mut state.position.0, &mut state.velocity.0, rng);
        step_axis(&mut state.position.1, &mut state.velocity.1, rng);
        step_axis(&mut state.position.2, &mut state.velocity.2, rng);
        state.yaw = ((u32::from(state.yaw) + rng.next_u32() % 13) % 4096) as u16;
        if burst_now {
            state.flags.toggle(StateFlags::CROUCHED | StateFlags::FIRING);
        }
        if rng.next_u32() % 50 == 0 {
            state.flags.toggle(StateFlags::RELOADING);
        }
    }
}

fn step_axis(position: &mut i64, velocity: &mut i64, rng: &mut Rng) {
    if rng.next_u32() % 20 == 0 {
        *velocity = (*velocity + rng.range_i64(-50, 50)).clamp(VEL_MIN, VEL_MAX);
    }
    *position = (*position + *velocity).clamp(POS_MIN, POS_MAX);
    if *position == POS_MIN || *position == POS_MAX {
        *velocity = -*velocity;
    }
}

#[must_use]
pub fn build_frame(tick: u32, states: &[EntityState]) -> Frame {
    Frame {
        tick,
        entities: states.to_vec(),
    }
}
