//! Multiply/shift divisor table for the stack blur.
//!
//! The per-pixel weighted sum must be divided by `(radius + 1)^2`
//! (the triangular kernel's weight total). The classic stack-blur
//! tables replace that division with `(sum * mul) >> shr`, exact for
//! every sum reachable from 8-bit channels, covering radii 0..=254.

/// Multiplication factors, indexed by radius.
#[rustfmt::skip]
const STACK_BLUR8_MUL: [u32; 255] = [
    512,512,456,512,328,456,335,512,405,328,271,456,388,335,292,512,
    454,405,364,328,298,271,496,456,420,388,360,335,312,292,273,512,
    482,454,428,405,383,364,345,328,312,298,284,271,259,496,475,456,
    437,420,404,388,374,360,347,335,323,312,302,292,282,273,265,512,
    497,482,468,454,441,428,417,405,394,383,373,364,354,345,337,328,
    320,312,305,298,291,284,278,271,265,259,507,496,485,475,465,456,
    446,437,428,420,412,404,396,388,381,374,367,360,354,347,341,335,
    329,323,318,312,307,302,297,292,287,282,278,273,269,265,261,512,
    505,497,489,482,475,468,461,454,447,441,435,428,422,417,411,405,
    399,394,389,383,378,373,368,364,359,354,350,345,341,337,332,328,
    324,320,316,312,309,305,301,298,294,291,287,284,281,278,274,271,
    268,265,262,259,257,507,501,496,491,485,480,475,470,465,460,456,
    451,446,442,437,433,428,424,420,416,412,408,404,400,396,392,388,
    385,381,377,374,370,367,363,360,357,354,350,347,344,341,338,335,
    332,329,326,323,320,318,315,312,310,307,304,302,299,297,294,292,
    289,287,285,282,280,278,275,273,271,269,267,265,263,261,259,
];

/// Right-shift amounts, indexed by radius.
#[rustfmt::skip]
const STACK_BLUR8_SHR: [u32; 255] = [
     9, 11, 12, 13, 13, 14, 14, 15, 15, 15, 15, 16, 16, 16, 16, 17,
    17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 18, 18, 18, 19,
    19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 20, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
];

/// Immutable multiply/shift lookup owned by the filter.
///
/// Constructed explicitly and passed in rather than consulted as
/// process-global state; the filter holds one for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct DivisorTable {
    mul: &'static [u32],
    shr: &'static [u32],
}

impl Default for DivisorTable {
    fn default() -> Self {
        Self {
            mul: &STACK_BLUR8_MUL,
            shr: &STACK_BLUR8_SHR,
        }
    }
}

impl DivisorTable {
    /// Largest radius the table can serve.
    pub fn max_radius(&self) -> u32 {
        (self.mul.len() - 1) as u32
    }

    /// The `(multiplier, shift)` pair for a radius, or `None` when the
    /// radius exceeds the table.
    pub fn lookup(&self, radius: u32) -> Option<(u64, u32)> {
        let i = radius as usize;
        match (self.mul.get(i), self.shr.get(i)) {
            (Some(&mul), Some(&shr)) => Some((mul as u64, shr)),
            _ => None,
        }
    }
}
