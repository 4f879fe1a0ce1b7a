//! Matrix driver: device state, drawing entry points and the zigzag
//! frame serializer for MAX7219 chains.

use heapless::Vec;
use tessella_core::canvas::{
    Canvas, CanvasError, Rotation, MAX_HORIZONTAL_TILES, MAX_VERTICAL_TILES, TILE_SIZE,
};
use tessella_core::font::{Font, FONT_3X5};
use tessella_core::glyph;
use tessella_core::raster::Painter;
use tessella_hal::spi::{Mode, SpiConfig, SpiDevice};

use crate::bitrev::reverse_bits;

/// Register opcodes in the upper command byte, per the MAX7219
/// datasheet
mod opcode {
    pub const DECODE: u16 = 0x0900;
    pub const INTENSITY: u16 = 0x0A00;
    pub const SCAN_LIMIT: u16 = 0x0B00;
    pub const ENABLE: u16 = 0x0C00;
    pub const TEST: u16 = 0x0F00;
}

/// Highest intensity level the chip accepts
pub const MAX_INTENSITY: u8 = 0x0F;

/// Longest supported chip chain
const MAX_CHAIN: usize = MAX_HORIZONTAL_TILES * MAX_VERTICAL_TILES;

const TILE_ROWS: u8 = TILE_SIZE as u8;

/// How the tile chain is physically wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wiring {
    /// Alternating-direction chain: odd tile rows run right to left
    /// and are mounted upside down
    #[default]
    Zigzag,
    /// Straight-through chain, every tile row left to right. No
    /// serializer for it yet; [`Matrix::render`] rejects it.
    Progressive,
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The configured wiring topology has no serializer
    UnsupportedWiring,
    /// The bus transfer failed
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}

/// Mutable device state
///
/// Owned by the driver instance and handed to the canvas, rasterizer
/// and serializer explicitly; nothing reads it through globals.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    /// Display enabled
    pub power: bool,
    /// LED drive intensity, 0-15
    pub intensity: u8,
    /// Mounting orientation
    pub rotation: Rotation,
    /// Complement every transmitted data byte
    pub inverted: bool,
    /// Font used by the char/string entry points
    pub font: &'static Font,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            power: false,
            intensity: 0,
            rotation: Rotation::Standard,
            inverted: false,
            font: &FONT_3X5,
        }
    }
}

/// Driver for a rectangular grid of daisy-chained MAX7219 tiles
#[derive(Debug)]
pub struct Matrix<SPI> {
    spi: SPI,
    canvas: Canvas,
    config: DisplayConfig,
    wiring: Wiring,
}

impl<SPI> Matrix<SPI>
where
    SPI: SpiDevice,
{
    /// Create a driver for a `tiles_wide` x `tiles_high` grid
    ///
    /// The canvas starts cleared. Call [`Matrix::init`] before drawing
    /// to bring the chips into a known state.
    pub fn new(
        spi: SPI,
        tiles_wide: u8,
        tiles_high: u8,
        wiring: Wiring,
    ) -> Result<Self, CanvasError> {
        Ok(Self {
            spi,
            canvas: Canvas::new(tiles_wide, tiles_high)?,
            config: DisplayConfig::default(),
            wiring,
        })
    }

    /// Bus settings the MAX7219 chain requires
    pub const fn bus_config() -> SpiConfig {
        SpiConfig {
            frequency: 5_000_000,
            mode: Mode::Mode0,
        }
    }

    /// Bring every chip into a known state
    ///
    /// Test mode off, raw (no-decode) addressing, all 8 rows scanned,
    /// dark and powered down, canvas blank on the wire.
    pub fn init(&mut self) -> Result<(), Error<SPI::Error>> {
        self.send_command(opcode::TEST)?;
        self.send_command(opcode::DECODE)?;
        self.send_command(opcode::SCAN_LIMIT | 7)?;
        self.set_power(false)?;
        self.set_intensity(0)?;
        self.canvas.clear();
        self.render()
    }

    /// Enable or blank the display
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<SPI::Error>> {
        self.config.power = on;
        self.send_command(opcode::ENABLE | u16::from(on))
    }

    /// Set the LED drive intensity; levels above 15 are clamped
    pub fn set_intensity(&mut self, level: u8) -> Result<(), Error<SPI::Error>> {
        let level = level.min(MAX_INTENSITY);
        self.config.intensity = level;
        self.send_command(opcode::INTENSITY | u16::from(level))
    }

    /// Set the mounting orientation applied to subsequent draw calls
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.config.rotation = rotation;
    }

    /// Select the font used by [`Matrix::draw_char`] and
    /// [`Matrix::draw_string`]
    pub fn set_font(&mut self, font: &'static Font) {
        self.config.font = font;
    }

    /// Invert the whole display on the wire (lit becomes dark)
    pub fn set_inverted(&mut self, inverted: bool) {
        self.config.inverted = inverted;
    }

    pub fn power(&self) -> bool {
        self.config.power
    }

    pub fn intensity(&self) -> u8 {
        self.config.intensity
    }

    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    pub fn is_inverted(&self) -> bool {
        self.config.inverted
    }

    pub fn font(&self) -> &'static Font {
        self.config.font
    }

    /// Glyph width of the active font, for caller-side layout
    pub fn font_cols(&self) -> u8 {
        self.config.font.cols()
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.canvas.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.canvas.height()
    }

    /// Set or clear one pixel; off-canvas writes are dropped
    pub fn set_pixel(&mut self, x: i16, y: i16, on: bool) {
        self.canvas.set_pixel(self.config.rotation, x, y, on);
    }

    /// Read one pixel back; off-canvas reads return `false`
    pub fn pixel(&self, x: i16, y: i16) -> bool {
        self.canvas.get_pixel(self.config.rotation, x, y)
    }

    /// Blank the canvas (transmitted on the next [`Matrix::render`])
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    fn painter(&mut self) -> Painter<'_> {
        Painter::new(&mut self.canvas, self.config.rotation)
    }

    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, on: bool) {
        self.painter().line(x0, y0, x1, y1, on);
    }

    pub fn draw_angled_line(&mut self, x0: i16, y0: i16, length: u8, angle: u16, on: bool) {
        self.painter().angled_line(x0, y0, length, angle, on);
    }

    pub fn draw_hline(&mut self, x: i16, y: i16, w: u8, on: bool) {
        self.painter().hline(x, y, w, on);
    }

    pub fn draw_vline(&mut self, x: i16, y: i16, h: u8, on: bool) {
        self.painter().vline(x, y, h, on);
    }

    pub fn draw_rect(&mut self, x: i16, y: i16, w: u8, h: u8, on: bool) {
        self.painter().rect(x, y, w, h, on);
    }

    pub fn draw_fill_rect(&mut self, x: i16, y: i16, w: u8, h: u8, on: bool) {
        self.painter().fill_rect(x, y, w, h, on);
    }

    pub fn draw_circle(&mut self, cx: i16, cy: i16, r: i16, on: bool) {
        self.painter().circle(cx, cy, r, on);
    }

    pub fn draw_fill_circle(&mut self, cx: i16, cy: i16, r: i16, on: bool) {
        self.painter().fill_circle(cx, cy, r, on);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        on: bool,
    ) {
        self.painter().triangle(x0, y0, x1, y1, x2, y2, on);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        on: bool,
    ) {
        self.painter().fill_triangle(x0, y0, x1, y1, x2, y2, on);
    }

    /// Draw one character in the active font
    pub fn draw_char(&mut self, x: i16, y: i16, ch: char, on: bool) {
        let font = self.config.font;
        glyph::draw_char(&mut self.painter(), font, x, y, ch, on);
    }

    /// Draw a string in the active font
    pub fn draw_string(&mut self, x: i16, y: i16, text: &str, on: bool) {
        let font = self.config.font;
        glyph::draw_string(&mut self.painter(), font, x, y, text, on);
    }

    /// Serialize the whole canvas and stream it to the chain
    ///
    /// One bus transaction per physical tile row. Even tile rows go
    /// out left to right with the row address as-is; odd tile rows go
    /// out right to left with the row address mirrored and the data
    /// byte bit-reversed, matching their flipped mounting.
    pub fn render(&mut self) -> Result<(), Error<SPI::Error>> {
        if self.wiring != Wiring::Zigzag {
            #[cfg(feature = "defmt")]
            defmt::warn!("no serializer for wiring {}", self.wiring);
            return Err(Error::UnsupportedWiring);
        }

        for r in 0..TILE_ROWS {
            // Row addresses repeat every tile height down the stack
            let row_address = r % TILE_ROWS;
            let mut words: Vec<u16, MAX_CHAIN> = Vec::new();

            for group in 0..self.canvas.tiles_high() {
                let y = r + group * TILE_ROWS;

                if group % 2 == 1 {
                    let address = 7 - row_address;
                    for col in (0..self.canvas.tiles_wide()).rev() {
                        let byte = reverse_bits(self.row_data(col, y));
                        let _ = words.push(u16::from(address + 1) << 8 | u16::from(byte));
                    }
                } else {
                    for col in 0..self.canvas.tiles_wide() {
                        let byte = self.row_data(col, y);
                        let _ = words.push(u16::from(row_address + 1) << 8 | u16::from(byte));
                    }
                }
            }

            self.spi.transaction(&words)?;
        }
        Ok(())
    }

    /// Hand the bus back
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Canvas byte for one tile cell, with display inversion applied
    fn row_data(&self, tile_col: u8, y: u8) -> u8 {
        let byte = self.canvas.row_byte(tile_col, y);
        if self.config.inverted {
            !byte
        } else {
            byte
        }
    }

    /// Send one configuration word to every chip in the chain
    fn send_command(&mut self, command: u16) -> Result<(), Error<SPI::Error>> {
        let mut words: Vec<u16, MAX_CHAIN> = Vec::new();
        for _ in 0..self.chain_len() {
            let _ = words.push(command);
        }
        self.spi.transaction(&words)?;
        Ok(())
    }

    fn chain_len(&self) -> usize {
        self.canvas.tiles_wide() as usize * self.canvas.tiles_high() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessella_core::font::FONT_4X6;

    /// Records every transaction the driver opens
    #[derive(Debug)]
    struct MockSpi {
        transactions: Vec<Vec<u16, MAX_CHAIN>, 64>,
    }

    impl MockSpi {
        fn new() -> Self {
            Self {
                transactions: Vec::new(),
            }
        }
    }

    impl SpiDevice for MockSpi {
        type Error = core::convert::Infallible;

        fn transaction(&mut self, words: &[u16]) -> Result<(), Self::Error> {
            let mut t = Vec::new();
            let _ = t.extend_from_slice(words);
            let _ = self.transactions.push(t);
            Ok(())
        }
    }

    fn matrix(tiles_wide: u8, tiles_high: u8) -> Matrix<MockSpi> {
        Matrix::new(MockSpi::new(), tiles_wide, tiles_high, Wiring::Zigzag).unwrap()
    }

    #[test]
    fn test_command_fans_out_to_every_chip() {
        let mut m = matrix(2, 2);
        m.set_intensity(20).unwrap();

        // Clamped to 15 and repeated once per chip in one transaction
        assert_eq!(m.intensity(), 15);
        assert_eq!(m.spi.transactions.len(), 1);
        assert_eq!(m.spi.transactions[0].as_slice(), &[0x0A0F; 4]);
    }

    #[test]
    fn test_power_commands() {
        let mut m = matrix(1, 1);
        m.set_power(true).unwrap();
        m.set_power(false).unwrap();

        assert_eq!(m.spi.transactions[0].as_slice(), &[0x0C01]);
        assert_eq!(m.spi.transactions[1].as_slice(), &[0x0C00]);
        assert!(!m.power());
    }

    #[test]
    fn test_init_sequence() {
        let mut m = matrix(1, 1);
        m.init().unwrap();

        // Config words first, then eight frame rows
        assert_eq!(m.spi.transactions.len(), 13);
        assert_eq!(m.spi.transactions[0].as_slice(), &[0x0F00]);
        assert_eq!(m.spi.transactions[1].as_slice(), &[0x0900]);
        assert_eq!(m.spi.transactions[2].as_slice(), &[0x0B07]);
        assert_eq!(m.spi.transactions[3].as_slice(), &[0x0C00]);
        assert_eq!(m.spi.transactions[4].as_slice(), &[0x0A00]);
        for r in 0..8u16 {
            assert_eq!(m.spi.transactions[5 + r as usize].as_slice(), &[(r + 1) << 8]);
        }
    }

    #[test]
    fn test_render_single_row_grid() {
        let mut m = matrix(2, 1);
        m.draw_hline(0, 4, 16, true);
        m.render().unwrap();

        // One transaction per physical row, two tiles left to right
        assert_eq!(m.spi.transactions.len(), 8);
        for r in 0..8u16 {
            let byte = if r == 4 { 0xFF } else { 0x00 };
            let word = (r + 1) << 8 | byte;
            assert_eq!(m.spi.transactions[r as usize].as_slice(), &[word, word]);
        }
    }

    #[test]
    fn test_render_zigzag_flips_odd_tile_rows() {
        let mut m = matrix(2, 2);
        // One pixel at the left edge of the lower-left tile
        m.set_pixel(0, 8, true);
        m.render().unwrap();

        assert_eq!(m.spi.transactions.len(), 8);

        // Physical row 0: upper group forward with address 1, lower
        // group reversed with mirrored address 8 and bit-reversed data
        assert_eq!(
            m.spi.transactions[0].as_slice(),
            &[0x0100, 0x0100, 0x0800, 0x0801]
        );

        // Remaining rows carry no data but keep the mirrored address
        for r in 1..8u16 {
            assert_eq!(
                m.spi.transactions[r as usize].as_slice(),
                &[(r + 1) << 8, (r + 1) << 8, (8 - r) << 8, (8 - r) << 8]
            );
        }
    }

    #[test]
    fn test_render_rejects_unsupported_wiring() {
        let mut m = Matrix::new(MockSpi::new(), 2, 1, Wiring::Progressive).unwrap();
        m.set_pixel(0, 0, true);

        assert_eq!(m.render(), Err(Error::UnsupportedWiring));
        // Nothing reached the bus
        assert!(m.spi.transactions.is_empty());
    }

    #[test]
    fn test_render_inverted_complements_bytes() {
        let mut m = matrix(1, 1);
        m.set_pixel(0, 0, true);
        m.set_inverted(true);
        m.render().unwrap();

        assert_eq!(m.spi.transactions[0].as_slice(), &[0x017F]);
        assert_eq!(m.spi.transactions[1].as_slice(), &[0x02FF]);
    }

    #[test]
    fn test_rotation_applies_to_writes() {
        let mut m = matrix(1, 1);
        m.set_rotation(Rotation::UpsideDown);
        m.set_pixel(0, 0, true);
        m.render().unwrap();

        // Mirrored into the opposite corner of storage
        assert_eq!(m.spi.transactions[7].as_slice(), &[0x0801]);
        assert!(m.pixel(0, 0));
    }

    #[test]
    fn test_grid_limits_propagate() {
        assert_eq!(
            Matrix::new(MockSpi::new(), 5, 1, Wiring::Zigzag).unwrap_err(),
            CanvasError::GridTooLarge
        );
        assert_eq!(
            Matrix::new(MockSpi::new(), 0, 1, Wiring::Zigzag).unwrap_err(),
            CanvasError::EmptyGrid
        );
    }

    #[test]
    fn test_draw_string_renders_glyph_rows() {
        let mut m = matrix(1, 1);
        m.draw_string(0, 0, "A", true);
        m.render().unwrap();

        let expected: [u8; 8] = [0xA0, 0xA0, 0xE0, 0xA0, 0xE0, 0x00, 0x00, 0x00];
        for (r, &byte) in expected.iter().enumerate() {
            let word = (r as u16 + 1) << 8 | u16::from(byte);
            assert_eq!(m.spi.transactions[r].as_slice(), &[word], "row {}", r);
        }
    }

    #[test]
    fn test_font_switch_changes_layout() {
        let mut m = matrix(2, 1);
        assert_eq!(m.font_cols(), 3);
        m.set_font(&FONT_4X6);
        assert_eq!(m.font_cols(), 4);

        m.draw_char(0, 0, '|', true);
        m.render().unwrap();
        // '|' in 4x6 lights column 1 over six rows
        assert_eq!(m.spi.transactions[5].as_slice()[0], 0x0640);
        assert_eq!(m.spi.transactions[6].as_slice()[0], 0x0700);
    }

    #[test]
    fn test_bus_config() {
        let config = Matrix::<MockSpi>::bus_config();
        assert_eq!(config.frequency, 5_000_000);
        assert_eq!(config.mode, Mode::Mode0);
    }

    #[test]
    fn test_clear_blanks_next_frame() {
        let mut m = matrix(1, 1);
        m.draw_fill_rect(0, 0, 8, 8, true);
        m.clear();
        m.render().unwrap();

        for r in 0..8u16 {
            assert_eq!(m.spi.transactions[r as usize].as_slice(), &[(r + 1) << 8]);
        }
    }

    #[test]
    fn test_release_returns_bus() {
        let m = matrix(1, 1);
        let spi = m.release();
        assert!(spi.transactions.is_empty());
    }
}
