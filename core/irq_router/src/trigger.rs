use crate::dispatch::Dispatch;
use crate::flags::{channel_mask, IrqFlags};

/// Stimulus side of the four state machines.
pub trait StimulusPort {
    /// Queue one word into channel `ch`'s TX FIFO, stalling until the
    /// hardware has capacity.
    fn send_blocking(&mut self, ch: usize, word: u32);
}

/// What one driver-loop step saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerReport {
    pub channel: usize,
    pub expected: u32,
    pub observed: u32,
}

/// One driver-loop step for `ch`: stimulate, inspect, dispatch, reset.
///
/// The snapshot is taken right after the send with no wait on the
/// interrupt. Depending on whether the handler has run yet, the value may
/// be stale, zero or correct; the step reports what it saw either way.
pub fn trigger<P: StimulusPort, const N: usize>(
    port: &mut P,
    flags: &IrqFlags,
    dispatch: &Dispatch<N>,
    ch: usize,
    word: u32,
) -> TriggerReport {
    port.send_blocking(ch, word);

    let observed = flags.snapshot();
    dispatch.run(observed);
    flags.clear();

    TriggerReport {
        channel: ch,
        expected: channel_mask(ch),
        observed,
    }
}
