use portable_atomic::{AtomicU32, Ordering};

/// Number of state machines multiplexed onto the shared interrupt line.
pub const CHANNELS: usize = 4;

/// Status-register bits that carry state-machine flags.
pub const CHANNEL_MASK: u32 = 0x0000_000F;

/// Flag bit raised by state machine `ch`.
#[inline]
pub const fn channel_mask(ch: usize) -> u32 {
    1 << ch
}

/// Shadow of the hardware interrupt-status register.
///
/// Written by the interrupt handler, read and reset by the driver loop. A
/// single relaxed word is the only synchronization between the two
/// contexts; a snapshot taken between the stimulus and the handler running
/// observes whatever was there before.
pub struct IrqFlags(AtomicU32);

impl IrqFlags {
    pub const fn new() -> Self {
        IrqFlags(AtomicU32::new(0))
    }

    /// Overwrite the shadow with a fresh status-register read.
    ///
    /// Unread flags from an earlier interrupt are dropped, not merged.
    pub fn publish(&self, bits: u32) {
        self.0.store(bits, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
