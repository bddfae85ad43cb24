use tracing::debug;

use crate::image_pipeline::bitmap::{BYTES_PER_PIXEL, Bitmap};
use crate::image_pipeline::blur::divisor::DivisorTable;
use crate::image_pipeline::blur::filter::BlurFilter;
use crate::image_pipeline::common::error::{FilterError, Result};

/// Stack blur: an approximate Gaussian blur with per-pass cost
/// independent of the radius.
///
/// Two 1-D passes (rows, then columns) slide a `2*radius + 1` window
/// with triangular weighting over each line, maintained incrementally
/// through three running sums per channel. Line ends are edge
/// replicated. The weighted sum is reduced to 8 bits with the
/// multiply/shift pair from the filter's [`DivisorTable`].
///
/// Each pass reads only from the previous pass's buffer; the input
/// bitmap is never mutated.
pub struct StackBlurFilter {
    table: DivisorTable,
}

impl StackBlurFilter {
    pub fn new() -> Self {
        Self::with_table(DivisorTable::default())
    }

    pub fn with_table(table: DivisorTable) -> Self {
        Self { table }
    }

    /// Largest radius this filter accepts.
    pub fn max_radius(&self) -> u32 {
        self.table.max_radius()
    }
}

impl Default for StackBlurFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlurFilter for StackBlurFilter {
    fn blur(&self, source: &Bitmap, radius: u32) -> Result<Bitmap> {
        if radius == 0 {
            return Ok(source.clone());
        }
        let (mul, shr) = self
            .table
            .lookup(radius)
            .ok_or(FilterError::UnsupportedRadius {
                radius,
                max: self.table.max_radius(),
            })?;

        let width = source.width();
        let height = source.height();
        debug!(width, height, radius, "Applying stack blur");

        let radius = radius as usize;
        let mut stack = vec![[0u8; 4]; 2 * radius + 1];
        let mut line = vec![[0u8; 4]; width.max(height)];
        let mut blurred = vec![[0u8; 4]; width.max(height)];

        // Horizontal pass: each row of the source into the intermediate.
        let mut intermediate = Bitmap::new_zeroed(width, height)?;
        for y in 0..height {
            gather_row(source.data(), width, y, &mut line[..width]);
            blur_line(
                &line[..width],
                &mut blurred[..width],
                &mut stack,
                radius,
                mul,
                shr,
            );
            scatter_row(intermediate.data_mut(), width, y, &blurred[..width]);
        }

        // Vertical pass: each column of the intermediate into the output.
        let mut output = Bitmap::new_zeroed(width, height)?;
        for x in 0..width {
            gather_column(intermediate.data(), width, height, x, &mut line[..height]);
            blur_line(
                &line[..height],
                &mut blurred[..height],
                &mut stack,
                radius,
                mul,
                shr,
            );
            scatter_column(output.data_mut(), width, height, x, &blurred[..height]);
        }

        Ok(output)
    }
}

/// One sliding-window pass over a single line of pixels.
///
/// The window is a circular stack of `2*radius + 1` entries. Three
/// running sums per channel carry the state: `sum` is the triangular
/// weighted total, `sum_in` the plain total of pixels on the incoming
/// half, `sum_out` the plain total of the outgoing half (center
/// included). Advancing one pixel costs a constant number of
/// additions regardless of radius. Positions past either end are
/// clamped to the nearest valid pixel.
fn blur_line(
    line: &[[u8; 4]],
    out: &mut [[u8; 4]],
    stack: &mut [[u8; 4]],
    radius: usize,
    mul: u64,
    shr: u32,
) {
    let len = line.len();
    let last = len - 1;
    let div = 2 * radius + 1;
    debug_assert_eq!(stack.len(), div);
    debug_assert_eq!(out.len(), len);

    let mut sum = [0u64; 4];
    let mut sum_in = [0u64; 4];
    let mut sum_out = [0u64; 4];

    // Prime the left half of the window with the replicated first
    // pixel: offset -radius + i carries weight i + 1.
    let first = line[0];
    for i in 0..=radius {
        stack[i] = first;
        let weight = (i + 1) as u64;
        for c in 0..4 {
            sum[c] += first[c] as u64 * weight;
            sum_out[c] += first[c] as u64;
        }
    }
    // Right half: offset i carries weight radius + 1 - i, clamped
    // reads past the line end.
    for i in 1..=radius {
        let p = line[i.min(last)];
        stack[i + radius] = p;
        let weight = (radius + 1 - i) as u64;
        for c in 0..4 {
            sum[c] += p[c] as u64 * weight;
            sum_in[c] += p[c] as u64;
        }
    }

    let mut stack_ptr = radius;
    for x in 0..len {
        for c in 0..4 {
            out[x][c] = ((sum[c] * mul) >> shr) as u8;
        }

        for c in 0..4 {
            sum[c] -= sum_out[c];
        }

        let mut stack_start = stack_ptr + div - radius;
        if stack_start >= div {
            stack_start -= div;
        }
        for c in 0..4 {
            sum_out[c] -= stack[stack_start][c] as u64;
        }

        let incoming = line[(x + radius + 1).min(last)];
        stack[stack_start] = incoming;
        for c in 0..4 {
            sum_in[c] += incoming[c] as u64;
            sum[c] += sum_in[c];
        }

        stack_ptr += 1;
        if stack_ptr >= div {
            stack_ptr = 0;
        }
        let center = stack[stack_ptr];
        for c in 0..4 {
            sum_out[c] += center[c] as u64;
            sum_in[c] -= center[c] as u64;
        }
    }
}

fn gather_row(data: &[u8], width: usize, y: usize, line: &mut [[u8; 4]]) {
    let row = &data[y * width * BYTES_PER_PIXEL..(y + 1) * width * BYTES_PER_PIXEL];
    for (pixel, chunk) in line.iter_mut().zip(row.chunks_exact(BYTES_PER_PIXEL)) {
        pixel.copy_from_slice(chunk);
    }
}

fn scatter_row(data: &mut [u8], width: usize, y: usize, line: &[[u8; 4]]) {
    let row = &mut data[y * width * BYTES_PER_PIXEL..(y + 1) * width * BYTES_PER_PIXEL];
    for (chunk, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(line.iter()) {
        chunk.copy_from_slice(pixel);
    }
}

fn gather_column(data: &[u8], width: usize, height: usize, x: usize, line: &mut [[u8; 4]]) {
    for y in 0..height {
        let off = (y * width + x) * BYTES_PER_PIXEL;
        line[y].copy_from_slice(&data[off..off + BYTES_PER_PIXEL]);
    }
}

fn scatter_column(data: &mut [u8], width: usize, height: usize, x: usize, line: &[[u8; 4]]) {
    for y in 0..height {
        let off = (y * width + x) * BYTES_PER_PIXEL;
        data[off..off + BYTES_PER_PIXEL].copy_from_slice(&line[y]);
    }
}
