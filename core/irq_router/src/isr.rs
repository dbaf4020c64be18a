use crate::flags::IrqFlags;

/// Status side of the PIO block, as seen from the interrupt handler.
pub trait IrqController {
    /// Raw interrupt-status register: bit N is set while state machine N
    /// holds its flag raised.
    fn pending(&mut self) -> u32;

    /// Write-1-to-clear acknowledge of the given bits.
    fn ack(&mut self, bits: u32);
}

/// Interrupt handler body. Runs in interrupt context and never blocks.
///
/// The status read is published as-is (last write wins) and the same bits
/// are written back so the hardware stops asserting the line for them.
pub fn service<C: IrqController>(hw: &mut C, flags: &IrqFlags) {
    let pending = hw.pending();
    flags.publish(pending);
    hw.ack(pending);
}
