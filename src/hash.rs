/// Fold a `u64` into a `u32` by XOR-ing the high half into the low half.
///
/// Both halves contribute to the result, so values differing only in their
/// upper 32 bits still fold to different keys.
pub fn fold_u64(value: u64) -> u32 {
    (value ^ (value >> 32)) as u32
}
