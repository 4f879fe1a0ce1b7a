//! SPI bus abstractions
//!
//! The display chain speaks 16-bit words, most-significant bit first,
//! framed by a chip-select assertion per transaction. The traits here
//! keep the driver independent of the chip-specific SPI peripheral.

use crate::gpio::OutputPin;

/// Raw SPI master, word oriented
///
/// Implementations shift each word out most-significant bit first and
/// leave chip select to the caller.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Transmit one 16-bit word
    fn write_word(&mut self, word: u16) -> Result<(), Self::Error>;

    /// Transmit a sequence of words back to back
    fn write_words(&mut self, words: &[u16]) -> Result<(), Self::Error> {
        for &word in words {
            self.write_word(word)?;
        }
        Ok(())
    }
}

/// SPI bus with exclusive access to one device
///
/// A transaction asserts chip select, shifts out every word in order
/// and deasserts chip select before returning. Daisy-chained shift
/// registers latch on the deassert edge, so all words for one update
/// must go out inside a single transaction.
pub trait SpiDevice {
    /// Error type for SPI operations
    type Error;

    /// Run one chip-select framed transfer
    fn transaction(&mut self, words: &[u16]) -> Result<(), Self::Error>;
}

/// Bundles a raw [`SpiBus`] with an active-low chip-select pin
///
/// Useful when the platform HAL only exposes a bare SPI peripheral and
/// a GPIO; chip select is deasserted on construction.
pub struct CsDevice<B, CS> {
    bus: B,
    cs: CS,
}

impl<B, CS> CsDevice<B, CS>
where
    B: SpiBus,
    CS: OutputPin,
{
    /// Pair a bus with its chip-select pin
    pub fn new(bus: B, mut cs: CS) -> Self {
        cs.set_high();
        Self { bus, cs }
    }

    /// Release the bus and pin
    pub fn release(self) -> (B, CS) {
        (self.bus, self.cs)
    }
}

impl<B, CS> SpiDevice for CsDevice<B, CS>
where
    B: SpiBus,
    CS: OutputPin,
{
    type Error = B::Error;

    fn transaction(&mut self, words: &[u16]) -> Result<(), Self::Error> {
        self.cs.set_low();
        let result = self.bus.write_words(words);
        self.cs.set_high();
        result
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
        }
    }
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// CPOL=0, CPHA=0
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}
