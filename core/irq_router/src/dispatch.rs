use crate::flags::channel_mask;

/// Per-channel reaction hook; receives the flags snapshot it matched on.
pub type Handler = fn(u32);

/// Channel index to handler table for the state-machine flag bits.
///
/// These are extension points only: nothing is registered by default and
/// the handshake itself never depends on a handler being present.
pub struct Dispatch<const N: usize> {
    handlers: [Option<Handler>; N],
}

impl<const N: usize> Dispatch<N> {
    pub const fn new() -> Self {
        Dispatch {
            handlers: [None; N],
        }
    }

    pub fn on_irq(&mut self, channel: usize, handler: Handler) {
        self.handlers[channel] = Some(handler);
    }

    /// Evaluate every channel bit against `bits` and invoke the handler of
    /// each channel whose flag is set.
    pub fn run(&self, bits: u32) {
        for ch in 0..N {
            if bits & channel_mask(ch) != 0 {
                if let Some(handler) = self.handlers[ch] {
                    handler(bits);
                }
            }
        }
    }
}
