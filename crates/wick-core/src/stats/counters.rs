/// Run counters kept by the engine. `bits` tracks generator consumption;
/// every frame draws exactly 24 bits, and the tests hold that line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    pub frames: u64,
    pub bits: u64,
}
